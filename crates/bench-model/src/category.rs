use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Benchmark dataset category, one per supported benchmark site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Processors: www.cpubenchmark.net
    Cpu,
    /// Video cards: www.videocardbenchmark.net
    Gpu,
    /// Hard drives and SSDs: www.harddrivebenchmark.net
    Storage,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cpu, Category::Gpu, Category::Storage];

    /// Path of the data endpoint, shared by every site.
    pub const DATA_PATH: &'static str = "/data/";

    /// Domain selector used by the upstream site.
    pub fn domain(&self) -> &'static str {
        match self {
            Category::Cpu => "www.cpubenchmark.net",
            Category::Gpu => "www.videocardbenchmark.net",
            Category::Storage => "www.harddrivebenchmark.net",
        }
    }

    /// Site origin, `https://` plus the domain.
    pub fn origin(&self) -> String {
        format!("https://{}", self.domain())
    }

    pub fn mega_page_path(&self) -> &'static str {
        match self {
            Category::Cpu => "/CPU_mega_page.html",
            Category::Gpu => "/GPU_mega_page.html",
            Category::Storage => "/hdd-mega-page.html",
        }
    }

    /// Landing page that must be visited before the data endpoint answers.
    pub fn mega_page_url(&self) -> String {
        format!("{}{}", self.origin(), self.mega_page_path())
    }

    /// Data endpoint; `cache_buster` is the request time in unix milliseconds.
    pub fn data_url(&self, cache_buster: i64) -> String {
        format!("{}{}?_={cache_buster}", self.origin(), Self::DATA_PATH)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Gpu => "gpu",
            Category::Storage => "storage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    /// Accepts the site domain or a short alias, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "www.cpubenchmark.net" | "cpu" => Ok(Category::Cpu),
            "www.videocardbenchmark.net" | "gpu" | "videocard" => Ok(Category::Gpu),
            "www.harddrivebenchmark.net" | "storage" | "hdd" | "harddrive" => {
                Ok(Category::Storage)
            }
            _ => Err(ModelError::InvalidDomain(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_domains_and_aliases() {
        assert_eq!("www.cpubenchmark.net".parse(), Ok(Category::Cpu));
        assert_eq!("GPU".parse(), Ok(Category::Gpu));
        assert_eq!(" hdd ".parse(), Ok(Category::Storage));
        assert_eq!(
            "www.example.com".parse::<Category>(),
            Err(ModelError::InvalidDomain("www.example.com".to_string()))
        );
    }

    #[test]
    fn data_url_uses_domain() {
        assert_eq!(
            Category::Gpu.data_url(1700000000000),
            "https://www.videocardbenchmark.net/data/?_=1700000000000"
        );
        assert_eq!(
            Category::Storage.mega_page_url(),
            "https://www.harddrivebenchmark.net/hdd-mega-page.html"
        );
    }
}
