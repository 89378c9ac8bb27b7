pub mod arp;
pub mod mac;

use clap::{ArgAction, ArgGroup, CommandFactory, Parser};
use ouilookup_common::config::{Config, DEFAULT_API_URL};
use ouilookup_common::network::mac::MacAddress;
use ouilookup_core::lookup::LookupService;
use ouilookup_core::system::SystemRepo;
use ouilookup_core::vendors::MacLookupRepo;

#[derive(Parser, Debug)]
#[command(name = "ouilookup", version)]
#[command(about = "Resolve the hardware vendor of MAC addresses.")]
#[command(group(ArgGroup::new("mode").args(["mac", "arp"])))]
pub struct CommandLine {
    /// Look up the vendor of one address, e.g. aa:bb:cc:00:00:00
    #[arg(short, long, value_name = "ADDRESS")]
    pub mac: Option<MacAddress>,

    /// Look up the vendor of every device in the ARP table
    #[arg(short, long)]
    pub arp: bool,

    /// Base URL of the vendor lookup service
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, PartialEq)]
pub enum Mode {
    Mac(MacAddress),
    Arp,
    Usage,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> Mode {
        match (self.mac, self.arp) {
            (Some(mac), _) => Mode::Mac(mac),
            (None, true) => Mode::Arp,
            (None, false) => Mode::Usage,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            no_banner: self.no_banner,
        }
    }

    pub fn print_usage() -> std::io::Result<()> {
        Self::command().print_help()
    }
}

pub fn build_service(cfg: &Config) -> anyhow::Result<LookupService> {
    let client = reqwest::Client::builder().build()?;
    Ok(LookupService::new(
        Box::new(SystemRepo::default()),
        Box::new(MacLookupRepo::new(client, cfg.api_url.as_str())),
    ))
}
