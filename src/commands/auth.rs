use clap::ArgMatches;
use colored::*;

use crate::config::{load_config, save_config};
use crate::error::BugzillaResult;

pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub async fn handle_auth(matches: &ArgMatches) -> BugzillaResult<()> {
    if let Some(api_key) = matches.get_one::<String>("api-key") {
        let mut config = load_config();
        config.api_key = Some(api_key.clone());
        if let Some(url) = matches.get_one::<String>("url") {
            config.base_url = url.clone();
        }
        save_config(&config)?;
        println!("{} API key saved for {}", "✓".green(), config.base_url);
    } else if matches.get_flag("show") {
        let config = load_config().resolve();
        match config.api_key {
            Some(key) => println!("API Key: {} ({})", mask_key(&key), config.base_url),
            None => println!("No API key configured"),
        }
    } else {
        println!("Usage: bzql auth --api-key <KEY> [--url <URL>] or bzql auth --show");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::mask_key;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("abcd"), "****");
        assert_eq!(mask_key("abcdefghijkl"), "abcd...ijkl");
    }
}
