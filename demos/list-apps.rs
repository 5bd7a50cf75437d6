fn help() {
    const HELP: &str = r#"
        CF_API=https://api.example.com CF_TOKEN="$(cf oauth-token)" \
            cargo run --example list-apps -- [app-guid]
    "#;
    println!("{HELP}");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match cf_apps_client::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            help();
            return Ok(());
        }
    };

    let client = cf_apps_client::ClientBuilder::new().build(config)?;

    let mut args = std::env::args();
    // drop exec
    let _ = args.next();

    if let Some(guid) = args.next() {
        let app = client.get_app_by_guid_no_inline_call(&guid).await?;
        println!(
            "{} in {}/{}",
            app.name,
            app.org_name().unwrap_or("-"),
            app.space_data.as_ref().map_or("-", |s| s.name.as_str())
        );

        for (index, instance) in client.get_app_instances(&guid).await? {
            println!("  #{index} {:?} since {}", instance.state, instance.since);
        }
        for route in client.get_app_routes(&guid).await? {
            println!("  route {}{}", route.host, route.path);
        }
        return Ok(());
    }

    for app in client.list_apps().await? {
        println!(
            "{} {} {:?} {}x{}MB",
            app.guid,
            app.name,
            app.state,
            app.instances,
            app.memory
        );
    }

    Ok(())
}
