// demos/daily_forecast.rs
use mitiempo::{format_temperature, MiTiempo, MunicipalityCode};

#[tokio::main]
async fn main() {
    env_logger::init();

    let mitiempo = match MiTiempo::builder().build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Any AEMET municipality code works here; 08019 is Barcelona.
    let result = mitiempo
        .daily_forecast()
        .municipality(MunicipalityCode::from("08019"))
        .call()
        .await;

    match result {
        Ok(today) => {
            println!("Fecha: {}", today.date);
            println!("Máx:   {}", format_temperature(today.temperature.max));
            println!("Mín:   {}", format_temperature(today.temperature.min));
            for sky in &today.sky_states {
                if let Some(period) = &sky.period {
                    println!("Cielo {period}: {}", sky.description);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
