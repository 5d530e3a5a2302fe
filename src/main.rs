use std::process::ExitCode;
use std::sync::Arc;

use caddy_gen::docker::BollardDockerClient;
use caddy_gen::logging::init_logging;
use caddy_gen::service::Service;
use caddy_gen::settings::Settings;
use caddy_gen::signals::wait_for_shutdown_signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => Arc::new(settings),
        Err(e) => {
            eprintln!("설정 로드 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = init_logging(&settings.logging);

    let client = match BollardDockerClient::connect(&settings.docker) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!(error = %e, "Docker 클라이언트 초기화 실패");
            return ExitCode::FAILURE;
        }
    };

    info!(
        network = %settings.docker.network,
        output = %settings.output.path.display(),
        notify = settings.notify.is_some(),
        "caddy_gen 시작"
    );

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match wait_for_shutdown_signal().await {
            Ok(()) => {
                info!("종료 시그널 수신");
                signal_token.cancel();
            }
            Err(e) => error!(error = %e, "시그널 핸들러 등록 실패"),
        }
    });

    let service = Service::new(client, settings);
    service.run(shutdown).await;

    ExitCode::SUCCESS
}
