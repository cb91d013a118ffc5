use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "threeai", about = "Calculator, tic-tac-toe and to-do list behind one HTTP server")]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// Directory holding todos.json
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory holding index.html and the page for each app
    #[arg(long, default_value = "templates")]
    pub pages_dir: PathBuf,

    /// Directory served under /static/
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Directory for the daily rolling JSON log
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
