use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize(&args.log_filter);
    tracing::info!("running deployer with validated arguments:\n{}", args);

    match deployer::run(args).await {
        Ok(line) => println!("{line}"),
        Err(err) => {
            tracing::error!(?err, "deployment failed");
            std::process::exit(1);
        }
    }
}
