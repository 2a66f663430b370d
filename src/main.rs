use ackcov::cli::{self, Commands, SessionOptions};
use ackcov::observability::{init_tracing, install_panic_hook};
use anyhow::Result;

fn main() -> Result<()> {
    install_panic_hook();
    let args = cli::parse_args();
    init_tracing(args.verbosity);

    let options = SessionOptions {
        results_dir: args.results_dir,
        plain: args.plain,
    };

    match args.command {
        Commands::Overview { selection, output } => {
            cli::handle_overview_command(options, selection, output)
        }
        Commands::ControlPlane { selection, output } => {
            cli::handle_control_plane_command(options, selection, output)
        }
        Commands::Service {
            name,
            types,
            support,
            output,
        } => cli::handle_service_command(options, &name, types, support, output),
        Commands::ServiceControlPlane {
            name,
            support,
            output,
        } => cli::handle_service_control_plane_command(options, &name, support, output),
        Commands::Dashboard { services, top } => {
            cli::handle_dashboard_command(options, services, top)
        }
    }
}
