use clap::Parser;

use led_qr_labels_lib::cli::Cli;

fn main() -> anyhow::Result<()> {
    led_qr_labels_lib::init_tracing();
    // .env must be loaded before clap reads the QR_LABELS_* variables.
    led_qr_labels_lib::load_dotenv();

    let cli = Cli::parse();
    led_qr_labels_lib::run(&cli)
}
