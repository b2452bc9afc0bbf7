use std::error::Error;

pub fn validate_private_key_hex(hex_string: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    if hex_string.len() != 64 {
        return Err(format!("Private key must be 64 hex characters (32 bytes), got {}", hex_string.len()).into());
    }
    logic::parse_scalar(hex_string).map_err(|e| format!("Invalid private key: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_64_hex_characters() {
        assert!(validate_private_key_hex(&"ab".repeat(32)).is_ok());
        assert!(validate_private_key_hex(&"AB".repeat(32)).is_ok());
    }

    #[test]
    fn rejects_wrong_length_and_characters() {
        assert!(validate_private_key_hex(&"a".repeat(63)).is_err());
        assert!(validate_private_key_hex(&"a".repeat(66)).is_err());
        assert!(validate_private_key_hex(&"g".repeat(64)).is_err());
    }
}
