// demos/getafe_today.rs
use mitiempo::{
    ForecastOutcome, ForecastPresenter, ForecastReport, MiTiempo, MiTiempoError,
    MunicipalityCode, DEFAULT_MUNICIPALITY,
};

/// Console stand-in for the app screen: one callback per workflow state.
struct ConsolePresenter;

impl ForecastPresenter for ConsolePresenter {
    fn on_loading(&self) {
        println!("Cargando...");
    }

    fn on_success(&self, report: &ForecastReport) {
        println!("{} ({})", report.name, report.province);
        println!("Máx: {}", report.max_label);
        println!("Mín: {}", report.min_label);
        println!("Actualizado: {}", report.updated_at);
    }

    fn on_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), MiTiempoError> {
    // Set RUST_LOG=debug to watch the two-phase sequence, including the
    // mandatory pause between the calls.
    env_logger::init();

    // Reads the API key from AEMET_API_KEY; a missing key surfaces through
    // on_error, exactly like any other failure.
    let mitiempo = MiTiempo::builder().build()?;

    let workflow = mitiempo.workflow(MunicipalityCode::from(DEFAULT_MUNICIPALITY));
    match workflow.run(&ConsolePresenter).await {
        ForecastOutcome::Data(_) => Ok(()),
        _ => std::process::exit(1),
    }
}
