mod commands;
mod terminal;

use commands::{CommandLine, Mode, arp, mac};
use terminal::{logging, print};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    let cfg = commands.config();

    match commands.mode() {
        Mode::Usage => Ok(CommandLine::print_usage()?),
        Mode::Mac(addr) => {
            print::banner(cfg.no_banner);
            print::header("vendor lookup");
            mac::lookup(addr, &cfg).await
        }
        Mode::Arp => {
            print::banner(cfg.no_banner);
            print::header("arp table lookup");
            arp::lookup_all(&cfg).await
        }
    }
}
