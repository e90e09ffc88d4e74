use std::net::SocketAddr;

/// Start the mock API on a random port, driving axum on a dedicated
/// background thread with its own runtime. Works from both sync and
/// async tests.
pub fn spawn_mock_api() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_api::run(listener).await
        })
        .unwrap();
    });

    addr
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}
