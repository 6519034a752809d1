/// View formatters implementing the ViewFormatter port
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use text_formatter::{
    TextFormatter, EMPTY_DIRECTORY_MESSAGE, NO_MATCHES_MESSAGE, NO_POSTS_MESSAGE,
};
