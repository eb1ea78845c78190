/// Development server options
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    pub port: u16,

    /// Rebuild when sources change
    pub watch: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 4000,
            watch: true,
        }
    }
}

impl ServerConfig {
    pub fn new(address: &str, port: u16, watch: bool) -> Self {
        ServerConfig {
            address: address.to_string(),
            port,
            watch,
        }
    }

    /// `host:port`, bracketing IPv6 literals
    pub fn address_string(&self) -> String {
        if self.address.contains(':') && !self.address.starts_with('[') {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.address_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_string() {
        assert_eq!(ServerConfig::default().address_string(), "127.0.0.1:4000");
        assert_eq!(ServerConfig::new("::1", 8080, false).address_string(), "[::1]:8080");
        assert_eq!(ServerConfig::new("0.0.0.0", 80, true).url(), "http://0.0.0.0:80");
    }
}
