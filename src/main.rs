use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use asrank_propagator::as_graph::AsGraph;
use asrank_propagator::cli::Cli;
use asrank_propagator::error::{CycleKind, SimulatorError};
use asrank_propagator::io::{announcements, rib_csv, relationships, rov_asns};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap already printed usage; map to the spec's single fatal
            // exit code instead of clap's own exit(2).
            eprint!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimulatorError> {
    let mut graph = AsGraph::new();

    info!("loading relationships from {}", cli.relationships.display());
    relationships::load_relationships(&mut graph, &cli.relationships)?;
    info!("loaded {} ASes", graph.nodes.len());

    if graph.has_provider_cycle() {
        return Err(SimulatorError::CycleDetected { kind: CycleKind::Provider });
    }
    if graph.has_customer_cycle() {
        return Err(SimulatorError::CycleDetected { kind: CycleKind::Customer });
    }

    info!("flattening graph into propagation ranks");
    graph.flatten();
    info!("{} propagation ranks assigned", graph.propagation_ranks.len());

    info!("loading ROV ASNs from {}", cli.rov_asns.display());
    let rov_asns = rov_asns::load_rov_asns(&cli.rov_asns)?;
    info!("{} ASes running ROV", rov_asns.len());
    graph.initialize_policies(&rov_asns);

    info!("loading announcements from {}", cli.announcements.display());
    announcements::load_announcements(&mut graph, &cli.announcements)?;

    info!("propagating announcements");
    graph.propagate_announcements();

    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| SimulatorError::io(path.clone(), e))?;
            let mut writer = BufWriter::new(file);
            rib_csv::write_rib_csv(&graph, &mut writer)
                .and_then(|_| writer.flush())
                .map_err(|e| SimulatorError::io(path.clone(), e))?;
            info!("wrote RIB CSV to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            rib_csv::write_rib_csv(&graph, &mut handle).map_err(|e| SimulatorError::io("<stdout>", e))?;
        }
    }

    Ok(())
}
