use log::LevelFilter;

/// ロガー初期化
///
/// `RUST_LOG` が未設定なら warn 以上のみ出力。`verbose` 指定時は debug まで出力する。
pub fn init(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format_timestamp(None).format_target(false);

    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    // 二重初期化（テストなど）は無視
    let _ = builder.try_init();
}
