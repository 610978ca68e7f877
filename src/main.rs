use clap::Parser;
use textstyle_extractor::{create, handle_pipe_command, run_parse, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Handle commands
    match cli.command {
        Commands::Parse(args) => {
            let compact = args.compact;
            match run_parse(args).await {
                Ok(preview) => {
                    let json = if compact {
                        serde_json::to_string(&preview)?
                    } else {
                        serde_json::to_string_pretty(&preview)?
                    };
                    println!("{}", json);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Create(args) => {
            // Run the synthesis
            match create(args).await {
                Ok(summary) => {
                    println!("Style synthesis successful!");
                    println!("  - Processed {} stylesheets", summary.files_processed);
                    println!(
                        "  - Created {} text styles ({} matched from the library)",
                        summary.result.created, summary.result.matched
                    );
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Pipe(args) => {
            // Serve the message protocol
            handle_pipe_command(args).await?;
            Ok(())
        }
    }
}
