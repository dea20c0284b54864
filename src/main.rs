use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use serde::Serialize;

use lotocover::cover::{self, Scenario, VerifyReport, verify_cover};
use lotocover::{report, tables};

#[derive(Debug, Serialize)]
struct SolveResponse {
    k: usize,
    sb_size: usize,
    lower_bound: usize,
    approx_factor: f64,
    ln_bound: f64,
    alpha_over_ln: f64,
    elapsed_s: f64,
    peak_rss_mib: f64,
    verified_targets: usize,
}

fn main() {
    let matches = Command::new("lotocover")
        .version("0.1.0")
        .about("Greedy set-cover engine for Lotofácil dominating subsets")
        .subcommand(
            Command::new("solve")
                .about("Select SB15_k, verify the cover, and append the run log")
                .arg(
                    Arg::new("k")
                        .short('k')
                        .long("k")
                        .help("Target subset size")
                        .value_parser(["11", "12", "13", "14"])
                        .required(true),
                )
                .arg(
                    Arg::new("stream")
                        .long("stream")
                        .help("Recompute expansions on demand instead of storing them (less RAM, ~3x slower)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["human", "json"])
                        .default_value("human"),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Re-run the independent cover verifier against an emitted SB15_k")
                .arg(
                    Arg::new("k")
                        .short('k')
                        .long("k")
                        .help("Target subset size")
                        .value_parser(["11", "12", "13", "14"]),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Verify every scenario, k = 14 down to 11")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("gen")
                .about("Enumerate the S{k} combination tables into resultados/")
                .arg(
                    Arg::new("k")
                        .short('k')
                        .long("k")
                        .help("Subset sizes to enumerate (default: 15 14 13 12 11)")
                        .value_parser(value_parser!(u8).range(1..=25))
                        .action(ArgAction::Append)
                        .num_args(1..),
                ),
        )
        .subcommand(
            Command::new("cost")
                .about("Ticket cost report over the emitted SB15_k files")
                .arg(
                    Arg::new("price")
                        .long("price")
                        .help("Unit price per row")
                        .value_parser(value_parser!(f64))
                        .default_value("3.00"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", sub_matches)) => handle_solve(sub_matches),
        Some(("verify", sub_matches)) => handle_verify(sub_matches),
        Some(("gen", sub_matches)) => handle_gen(sub_matches),
        Some(("cost", sub_matches)) => handle_cost(sub_matches),
        _ => {
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn require_inputs(scenario: &Scenario) -> Result<()> {
    for path in [&scenario.targets_file, &scenario.rows_file] {
        if !path.exists() {
            return Err(anyhow!(
                "{} not found; run `lotocover gen` first",
                path.display()
            ));
        }
    }
    Ok(())
}

fn parse_k(matches: &ArgMatches) -> Option<usize> {
    matches
        .get_one::<String>("k")
        .map(|s| s.parse().expect("k is validated by clap"))
}

fn handle_solve(matches: &ArgMatches) -> Result<()> {
    let k = parse_k(matches).expect("k is required by clap");
    let store_all = !matches.get_flag("stream");
    let format = matches
        .get_one::<String>("format")
        .expect("format has default value in clap");

    let scenario = Scenario::for_k(k);
    require_inputs(&scenario)?;

    let summary = cover::run::solve(
        &scenario.config,
        &scenario.targets_file,
        &scenario.rows_file,
        &scenario.sb_file,
        store_all,
    )?;
    let report = verify_cover(&scenario.config, &scenario.targets_file, &scenario.sb_file)?;
    cover::append_log(&scenario.log_file, &summary)?;

    let response = SolveResponse {
        k,
        sb_size: summary.sb_size,
        lower_bound: summary.lower_bound,
        approx_factor: summary.approx_factor,
        ln_bound: summary.ln_bound,
        alpha_over_ln: summary.alpha_over_ln,
        elapsed_s: summary.elapsed_s,
        peak_rss_mib: summary.peak_rss_mib,
        verified_targets: report.targets,
    };
    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&response)?),
        _ => print_solve_summary(&response, &scenario),
    }
    Ok(())
}

fn print_solve_summary(r: &SolveResponse, scenario: &Scenario) {
    println!(
        "SB15_{} written to {} ({} rows)",
        r.k,
        scenario.sb_file.display(),
        r.sb_size
    );
    println!(
        "  lower bound {} | approx factor {:.4} | alpha/(ln|U|+1) {:.3}",
        r.lower_bound, r.approx_factor, r.alpha_over_ln
    );
    println!(
        "  cover of {} targets verified | {:.2}s | peak RAM {:.1} MiB",
        r.verified_targets, r.elapsed_s, r.peak_rss_mib
    );
}

fn handle_verify(matches: &ArgMatches) -> Result<()> {
    let ks: Vec<usize> = if matches.get_flag("all") {
        Scenario::SUPPORTED.to_vec()
    } else {
        vec![parse_k(matches).ok_or_else(|| anyhow!("pass --k <11..14> or --all"))?]
    };

    for k in ks {
        let scenario = Scenario::for_k(k);
        eprintln!(
            "verifying {} against {}",
            scenario.sb_file.display(),
            scenario.targets_file.display()
        );
        let VerifyReport { targets, rows } =
            verify_cover(&scenario.config, &scenario.targets_file, &scenario.sb_file)?;
        println!("k={}: {} rows cover all {} targets", k, rows, targets);
    }
    Ok(())
}

fn handle_gen(matches: &ArgMatches) -> Result<()> {
    let ks: Vec<usize> = match matches.get_many::<u8>("k") {
        Some(values) => values.map(|&k| k as usize).collect(),
        None => vec![15, 14, 13, 12, 11],
    };
    let out_dir = std::path::Path::new("resultados");
    for k in ks {
        let (path, written) = tables::write_table(out_dir, 25, k)?;
        println!("S{}: {} lines -> {}", k, written, path.display());
    }
    Ok(())
}

fn handle_cost(matches: &ArgMatches) -> Result<()> {
    let price = *matches
        .get_one::<f64>("price")
        .expect("price has default value in clap");

    let lines = report::cost_report(price)?;
    println!("{:<11} | {:>9} | {:>13} | Status", "Subset", "Rows", "Cost");
    for line in &lines {
        match (line.rows, line.cost) {
            (Some(rows), Some(cost)) => {
                println!("{:<11} | {:>9} | {:>13.2} | {}", line.label, rows, cost, line.status())
            }
            _ => println!("{:<11} | {:>9} | {:>13} | {}", line.label, "-", "-", line.status()),
        }
    }

    let out = report::default_output_path();
    report::write_cost_csv(&out, &lines)?;
    println!("cost table written to {}", out.display());
    Ok(())
}
