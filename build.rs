use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const BUILD_TIME_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // 注入构建时间，通过 env!("BUILD_TIME") 读取
    println!("cargo:rustc-env=BUILD_TIME={}", build_time());
}

/// 优先使用本地时间，无法确定时区时回退到 UTC
fn build_time() -> String {
    let (now, suffix) = match OffsetDateTime::now_local() {
        Ok(local) => (local, ""),
        Err(_) => (OffsetDateTime::now_utc(), " (UTC)"),
    };
    match now.format(BUILD_TIME_FORMAT) {
        Ok(formatted) => format!("{formatted}{suffix}"),
        Err(_) => "unknown-build-time".to_string(),
    }
}
