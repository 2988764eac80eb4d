use clap::Parser;

pub mod api;
pub mod biz;
pub mod model;

#[derive(Parser, Debug)]
enum ProgramArgs {
    ShowFeltReport { url: Option<String> },
}

#[tokio::main]
async fn main() {
    log4rs::init_file("conf/log4rs.yaml", Default::default()).unwrap();

    let arg = ProgramArgs::parse();
    log::info!("starting: {arg:?}");
    let result = match arg {
        ProgramArgs::ShowFeltReport { url } => {
            biz::show_felt_report::handle(url.as_deref().unwrap_or(api::USGS_QUERY_URL)).await
        }
    };

    if let Err(e) = result {
        log::error!("execute fail: {e}");
    }
}
