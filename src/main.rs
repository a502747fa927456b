use ccnotify::cli::CliApp;

#[tokio::main]
async fn main() {
    let code = CliApp::run().await;
    // Exit directly: a pending stdin read would otherwise hold the runtime open
    std::process::exit(code);
}
