// ===============================
// src/main.rs
// ===============================
/*
 # testnet (default), kredensial dari .env atau prompt
 cargo run --release

 # tanpa jaringan
 cargo run -- --mode mock --no-color

 tail -f bot.log
*/
/*
=============================================================================
Project : futures_order_bot — interactive Binance Futures order client
Module  : main.rs
Version : 0.1.0

Summary : Collects order parameters at the terminal, builds the futures
          order request, signs it and sends it to Binance USDⓈ-M Futures
          (testnet by default), logging every request/response to an
          append-only text log.
=============================================================================
*/
use anyhow::Result;
use console::Term;
use tracing::{info, warn};

use futures_order_bot::builder::build;
use futures_order_bot::config::{self, MarketMode};
use futures_order_bot::error::OrderError;
use futures_order_bot::gateway::{OrderGateway, PaperGateway};
use futures_order_bot::gateway_binance::{BinanceFuturesGateway, Credentials};
use futures_order_bot::logging;
use futures_order_bot::posttrade::{render_failure, render_request, render_success, submit};
use futures_order_bot::prompt::{is_interrupt, Prompter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // ---- Load config ----
    let args = config::load();

    // ---- Logging (file only) ----
    if let Err(e) = logging::init_file_logging(&args.log_file, &args.log_level) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }

    match run(&args).await {
        Ok(()) => info!("session ended"),
        Err(e) if is_interrupt(&e) => {
            warn!("interrupted, no order submitted");
            let _ = Term::stderr().show_cursor();
            std::process::exit(130);
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "fatal");
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    }
}

async fn run(args: &config::Args) -> Result<()> {
    let style = args.presentation();
    let prompter = Prompter::new(&style);
    let log_file = args.log_file.display().to_string();

    println!("{}", style.heading.apply_to("=== Binance Futures Trading Bot ==="));
    println!("{}", style.dim.apply_to(format!("mode: {}", args.mode.as_str())));

    // ---- Gateway (satu handle untuk seluruh sesi) ----
    let gateway: Box<dyn OrderGateway> = match args.mode {
        MarketMode::Mock => Box::new(PaperGateway::new()),
        MarketMode::BinanceTestnet | MarketMode::BinanceMainnet => {
            let rest_base = args.rest_base()?;
            let (api_key, api_secret) = match args.preset_credentials() {
                Some(pair) => pair,
                None => prompter.credentials()?,
            };
            Box::new(BinanceFuturesGateway::new(
                rest_base,
                Credentials { api_key, api_secret },
                args.recv_window,
            ))
        }
    };
    info!(
        mode = %args.mode.as_str(),
        venue = %gateway.venue(),
        testnet = args.mode.is_testnet(),
        "bot initialized"
    );

    // ---- Loop: prompt -> build -> confirm -> submit -> report ----
    loop {
        println!();
        let intent = prompter.intent()?;

        match build(&intent) {
            Err(e) => {
                // validation: ulangi prompt tanpa menyentuh exchange
                warn!(error = %e, "order rejected locally");
                println!("{}", render_failure(&OrderError::Validation(e), &log_file, &style));
                continue;
            }
            Ok(req) => {
                println!("{}", render_request(&req, &style));
                if prompter.confirm("Submit this order?", true)? {
                    match submit(gateway.as_ref(), &req).await {
                        Ok(ack) => println!("{}", render_success(&ack, &style)),
                        Err(e) => println!("{}", render_failure(&OrderError::Remote(e), &log_file, &style)),
                    }
                } else {
                    info!(params = %req, "order discarded by user");
                    println!("{}", style.dim.apply_to("Order not sent."));
                }
            }
        }

        if !prompter.confirm("Place another order?", false)? {
            break;
        }
    }
    Ok(())
}
