use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ticket_machine::config::MachineConfig;
use ticket_machine::fare::ListedFare;
use ticket_machine::io::ConsoleIo;
use ticket_machine::machine::TicketMachine;
use ticket_machine::offers::SpecialOfferManager;
use ticket_machine::purchase::PurchaseFlow;

fn main() {
    // Logs go to stderr so they never interleave with the menus on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match MachineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let network = match config.build_network() {
        Ok(network) => network,
        Err(e) => {
            error!("{e}");
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    info!(
        origin = %config.origin,
        stations = network.len(),
        "ticket machine starting"
    );

    let flow = PurchaseFlow::new(config.origin, ListedFare);
    let mut machine = TicketMachine::new(
        network,
        flow,
        SpecialOfferManager::new(),
        ConsoleIo::stdio(),
    );

    if let Err(e) = machine.run() {
        error!("{e}");
        eprintln!("Ticket machine stopped: {e}");
        std::process::exit(1);
    }
}
