// Control a local gateway from the command line.
//
// Usage:
//   LOCALGW=192.168.0.2 USER_NAME=admin PASSWORD=... cargo run --example local_gateway

use openmotics_api::{DEFAULT_PORT, LocalGateway, TransportConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let host = std::env::var("LOCALGW")?;
    let username = std::env::var("USER_NAME")?;
    let password = std::env::var("PASSWORD")?;
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let gateway = LocalGateway::new(
        host,
        port,
        username,
        password.into(),
        &TransportConfig::default(),
    );

    let version = gateway.exec_action("get_version", None).await?;
    println!("gateway version: {version:?}");

    for output in gateway.outputs().get_all().await? {
        println!(
            "output {:>3}  {:<24} on={} value={}",
            output.idx, output.name, output.status.on, output.status.value
        );
    }

    for sensor in gateway.sensors().get_all().await? {
        println!(
            "sensor {:>3}  {:<24} {:.1}C {:.0}%",
            sensor.idx, sensor.name, sensor.status.temperature, sensor.status.humidity
        );
    }

    gateway.close();
    Ok(())
}
