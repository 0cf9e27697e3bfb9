//! Xref command implementation.

use crate::cli::XrefArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use conforma_extractor::xref;

/// Execute the xref command.
pub fn execute_xref(args: XrefArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if !xref::contains_xref(&args.text) {
        eprintln!("{}", formatter.info("No xref markup found"));
    }
    println!("{}", normalize(&args, config));
    Ok(())
}

fn normalize(args: &XrefArgs, config: &Config) -> String {
    if args.resolve {
        xref::resolve_urls(&args.text, &config.extractor)
    } else {
        xref::unlink(&args.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_modes() {
        let config = Config::default();
        let mut args = XrefArgs {
            text: "See xref:mod:ROOT:file.adoc#anchor[Some Label]".to_string(),
            resolve: false,
        };
        assert_eq!(normalize(&args, &config), "See Some Label");

        args.resolve = true;
        assert_eq!(
            normalize(&args, &config),
            "See https://conforma.dev/docs/mod/file.html#anchor"
        );
    }
}
