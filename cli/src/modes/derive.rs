use std::error::Error;
use std::io::Write;

fn derive<W: Write>(private_key: &str, uncompressed: bool, out: &mut W) -> Result<(), Box<dyn Error + Send + Sync>> {
    let public_key = logic::bitcoin_public_key(private_key)?;
    writeln!(out, "public_key = {}", public_key)?;

    if uncompressed {
        let uncompressed_public_key = logic::bitcoin_public_key_uncompressed(private_key)?;
        writeln!(out, "uncompressed_public_key = {}", uncompressed_public_key)?;
    }

    Ok(())
}

pub fn run(private_key: &str, uncompressed: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    derive(private_key, uncompressed, &mut std::io::stdout())
}

#[cfg(test)]
mod test {
    use super::*;

    const ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn prints_compressed_generator() {
        let mut out = Vec::new();
        derive(ONE, false, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "public_key = 0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\n"
        );
    }

    #[test]
    fn prints_uncompressed_on_request() {
        let mut out = Vec::new();
        derive(ONE, true, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("uncompressed_public_key = 0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"));
    }

    #[test]
    fn surfaces_out_of_range_keys() {
        let mut out = Vec::new();
        let err = derive(&"0".repeat(64), false, &mut out).unwrap_err();

        assert!(err.to_string().contains("outside [1, n-1]"));
        assert!(out.is_empty());
    }
}
