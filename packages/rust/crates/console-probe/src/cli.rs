use clap::Parser;

#[derive(Parser)]
#[command(name = "console-probe", version)]
#[command(
    about = "Smoke-test the local RabbitMQ management console (http://localhost:15672).",
    long_about = "Checks the console homepage, /api/overview with guest/guest, /js/main.js and \
                  /css/main.css. Prints one status line per result and always exits 0."
)]
pub(crate) struct Cli {}
