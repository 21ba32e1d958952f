//! 撮影対象写真の正規ラベル一覧
//!
//! Excelの「Photo List」シートと撮影画面のセレクトボックスの元データ。
//! 撮影状況に関わらず常に全39件を出力する。

/// 正規ラベル数
pub const PHOTO_LABEL_COUNT: usize = 39;

/// 正規ラベル一覧（固定順）
pub const PHOTO_LABELS: [&str; PHOTO_LABEL_COUNT] = [
    "Pre-Installation Site Photo",
    "Sector A Pre-Installation",
    "Sector B Pre-Installation",
    "Sector C Pre-Installation",
    "Pre-Installation Cabinet/Rack Photo",
    "Pre-Installation Radio/RRH Photo",
    "Pre-Installation Antenna/Filter Photo",
    "Pre-Installation Fiber/Power Cable Photo",
    "Post-Installation Site Photo",
    "Sector A Post-Installation",
    "Sector B Post-Installation",
    "Sector C Post-Installation",
    "Post-Installation Cabinet/Rack Photo",
    "Post-Installation Radio/RRH Photo",
    "Post-Installation Antenna/Filter Photo",
    "Post-Installation Fiber/Power Cable Photo",
    "Equipment Serial Numbers",
    "Additional Photo 1",
    "Additional Photo 2",
    "Additional Photo 3",
    "Additional Photo 4",
    "Additional Photo 5",
    "Additional Photo 6",
    "Additional Photo 7",
    "Additional Photo 8",
    "Additional Photo 9",
    "Additional Photo 10",
    "Additional Photo 11",
    "Additional Photo 12",
    "Additional Photo 13",
    "Additional Photo 14",
    "Additional Photo 15",
    "Additional Photo 16",
    "Additional Photo 17",
    "Additional Photo 18",
    "Additional Photo 19",
    "Additional Photo 20",
    "Additional Photo 21",
    "Additional Photo 22",
];
