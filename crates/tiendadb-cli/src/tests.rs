use super::*;

#[test]
fn parses_validate_command() {
    let cli = Cli::try_parse_from(["tiendadb", "validate", "4006381333931"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Validate { ref code } if code == "4006381333931"
    ));
}

#[test]
fn parses_derive_with_default_symbology() {
    let cli = Cli::try_parse_from(["tiendadb", "derive", "--sku", "MX1000001"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Derive {
            symbology: SymbologyArg::Ean13,
            prefix: None,
            ..
        }
    ));
}

#[test]
fn parses_derive_upca_with_prefix_flag() {
    let cli = Cli::try_parse_from([
        "tiendadb", "derive", "--sku", "PROD999", "--symbology", "upca",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Derive {
            symbology: SymbologyArg::Upca,
            ..
        }
    ));
}

#[test]
fn parses_convert_command() {
    let cli = Cli::try_parse_from(["tiendadb", "convert", "0036000291452"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Convert { .. }));
}

#[test]
fn parses_enrich_with_output_override() {
    let cli = Cli::try_parse_from([
        "tiendadb",
        "enrich",
        "--input",
        "products.json",
        "--output",
        "enriched.json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Enrich {
            input: Some(_),
            output: Some(_),
        }
    ));
}

#[test]
fn report_output_has_a_default() {
    let cli = Cli::try_parse_from(["tiendadb", "report"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Report { input: None, ref output }
            if output.as_os_str() == "barcode_validation_results.json"
    ));
}

#[test]
fn extract_requires_symbology() {
    let result = Cli::try_parse_from(["tiendadb", "extract", "--output", "codes.txt"]);
    assert!(result.is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["tiendadb"]).is_err());
}
