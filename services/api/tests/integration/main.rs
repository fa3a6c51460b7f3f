mod http_test;
mod podcast_test;
mod register_test;
