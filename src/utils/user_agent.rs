//! User-agent string parsing for visit telemetry.

use woothee::parser::Parser;

/// Structured view of a user-agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInfo {
    pub browser_name: String,
    pub browser_version: String,
    pub os_name: String,
    pub device_class: String,
    pub platform: String,
}

/// Parses a raw user-agent header value.
///
/// Unrecognized or empty input yields `"Unknown"` in every field rather than
/// an error; telemetry must never fail on odd clients.
pub fn parse(user_agent: &str) -> AgentInfo {
    let Some(result) = Parser::new().parse(user_agent) else {
        return AgentInfo {
            browser_name: "Unknown".to_string(),
            browser_version: "Unknown".to_string(),
            os_name: "Unknown".to_string(),
            device_class: "Unknown".to_string(),
            platform: "Unknown".to_string(),
        };
    };

    AgentInfo {
        browser_name: or_unknown(result.name),
        browser_version: or_unknown(&result.version.to_string()),
        os_name: or_unknown(result.os),
        device_class: or_unknown(result.category),
        platform: platform_of(result.os).to_string(),
    }
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() || value == "UNKNOWN" {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}

/// Collapses an OS family name into a platform class.
fn platform_of(os: &str) -> &'static str {
    let os = os.to_ascii_lowercase();

    if os.contains("windows phone") {
        "WindowsPhone"
    } else if os.contains("windows") {
        "Windows"
    } else if os.contains("iphone") || os.contains("ipod") {
        "iPhone"
    } else if os.contains("ipad") {
        "iPad"
    } else if os.contains("mac") || os.contains("osx") {
        "Mac"
    } else if os.contains("android") {
        "Android"
    } else if os.contains("linux") || os.contains("ubuntu") {
        "Linux"
    } else if os.contains("blackberry") {
        "Blackberry"
    } else if os.contains("playstation") {
        "Playstation"
    } else if os.contains("xbox") {
        "Xbox"
    } else if os.contains("nintendo") {
        "Nintendo"
    } else {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_1 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Mobile/15E148 Safari/604.1";

    #[test]
    fn parses_desktop_chrome() {
        let info = parse(CHROME_WINDOWS);

        assert_eq!(info.browser_name, "Chrome");
        assert_eq!(info.device_class, "pc");
        assert_eq!(info.platform, "Windows");
        assert!(info.browser_version.starts_with("120"));
    }

    #[test]
    fn parses_mobile_safari() {
        let info = parse(SAFARI_IPHONE);

        assert_eq!(info.browser_name, "Safari");
        assert_eq!(info.device_class, "smartphone");
        assert_eq!(info.platform, "iPhone");
    }

    #[test]
    fn empty_agent_is_unknown_everywhere() {
        let info = parse("");

        assert_eq!(info.browser_name, "Unknown");
        assert_eq!(info.browser_version, "Unknown");
        assert_eq!(info.os_name, "Unknown");
        assert_eq!(info.device_class, "Unknown");
        assert_eq!(info.platform, "Unknown");
    }

    #[test]
    fn platform_mapping_covers_major_families() {
        assert_eq!(platform_of("Windows 10"), "Windows");
        assert_eq!(platform_of("Mac OSX"), "Mac");
        assert_eq!(platform_of("Android"), "Android");
        assert_eq!(platform_of("Linux"), "Linux");
        assert_eq!(platform_of("BeOS"), "Unknown");
    }
}
