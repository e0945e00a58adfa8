/// Key used to join balances with metadata. Contract addresses come back in
/// mixed (checksummed) case from some endpoints and lower case from others.
pub fn contract_key(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

/// Badge form of an account: first six and last four characters.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
