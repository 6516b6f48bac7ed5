use colored::Colorize;
use lazy_static::lazy_static;

#[macro_export]
macro_rules! log {
    ($scope: expr, $fmt_string:expr $(, $arg:expr )*) => {
        println!("[{}] {}", $scope, format!($fmt_string, $( $arg ),*));
    };
}

#[macro_export]
macro_rules! elog {
    ($scope: expr, $fmt_string:expr $(, $arg:expr )*) => {
        eprintln!("[{}] {}", $scope, format!($fmt_string, $( $arg ),*));
    };
}

#[rustfmt::skip]
lazy_static! {
    pub static ref LOG_GEOM  : String = "GEOM  ".blue() .to_string();
    pub static ref LOG_VIEWER: String = "VIEWER".green().to_string();
}
