fn main() {
    heroku_review_apps::app::cli::run();
}
