/// 縮圖擷取點位於影片長度的比例
pub const CAPTURE_FRACTION: f64 = 0.2;

/// 計算縮圖擷取時間：`min(max_offset, max(0, duration * 0.2))`
///
/// 長度未知（0.0）時固定在 0 秒擷取。
#[must_use]
pub fn capture_timestamp(duration_seconds: f64, max_offset: f64) -> f64 {
    max_offset.min((duration_seconds * CAPTURE_FRACTION).max(0.0))
}
