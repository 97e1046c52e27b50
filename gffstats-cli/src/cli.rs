use clap::{Arg, Command};

use crate::consts;

pub fn create_gffstats_cli() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Compute summary statistics (feature counts, mean lengths, strand distribution) for a GFF file.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("gff")
                .long("gff")
                .value_name("GFF")
                .required(true)
                .help("Path to input GFF file (.gz is decompressed, '-' reads stdin)"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .value_name("OUT")
                .required(true)
                .help("Output JSON path (parent directories are created; .gz is compressed)"),
        )
        .arg(
            Arg::new("filter-type")
                .long("filter-type")
                .value_name("TYPE")
                .required(false)
                .help("Only count features of this type (exact, case-sensitive match)"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_cli_definition_is_valid() {
        create_gffstats_cli().debug_assert();
    }

    #[rstest]
    fn test_parses_all_flags() {
        let matches = create_gffstats_cli()
            .try_get_matches_from([
                "gffstats", "--gff", "in.gff3", "--out", "out/stats.json", "--filter-type", "CDS",
            ])
            .unwrap();

        assert_eq!(matches.get_one::<String>("gff").unwrap(), "in.gff3");
        assert_eq!(matches.get_one::<String>("out").unwrap(), "out/stats.json");
        assert_eq!(matches.get_one::<String>("filter-type").unwrap(), "CDS");
    }

    #[rstest]
    fn test_filter_type_is_optional() {
        let matches = create_gffstats_cli()
            .try_get_matches_from(["gffstats", "--gff", "in.gff3", "--out", "stats.json"])
            .unwrap();

        assert!(matches.get_one::<String>("filter-type").is_none());
    }

    #[rstest]
    #[case::missing_out(&["gffstats", "--gff", "in.gff3"])]
    #[case::missing_gff(&["gffstats", "--out", "stats.json"])]
    fn test_required_flags(#[case] args: &[&str]) {
        assert!(create_gffstats_cli().try_get_matches_from(args).is_err());
    }
}
