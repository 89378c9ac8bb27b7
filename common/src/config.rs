/// Default base URL of the vendor lookup service. The address is appended as the last path segment.
pub const DEFAULT_API_URL: &str = "https://api.maclookup.app/v2/macs";

pub struct Config {
    /// Base URL of the vendor lookup service.
    pub api_url: String,
    /// Suppresses the banner line printed before each command.
    pub no_banner: bool,
}
