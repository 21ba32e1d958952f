//! Excelレポート生成
//!
//! フォーム入力と撮影写真から4シート構成のワークブックを組み立てる:
//! 1. "Baseband Swap": フォーム内容（固定セル配置）
//! 2. "Photos": 撮影写真の2列グリッド
//! 3. "Photo List": 正規ラベル全39件（撮影状況に依存しない）
//! 4. "Sheet4": 空のプレースホルダ

use rust_xlsxwriter::{
    Format, FormatAlign, Image, ObjectMovement, Workbook, Worksheet,
};

use crate::error::Result;
use crate::labels::PHOTO_LABELS;
use crate::types::{AntennaLocation, PhotoSet, SessionRecord};

/// xlsxのMIMEタイプ（ダウンロード時に使用）
pub const REPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 写真セルの埋め込みサイズ（px）
const PHOTO_WIDTH_PX: f64 = 300.0;
const PHOTO_HEIGHT_PX: f64 = 200.0;

/// 写真行の高さ（pt）と次のグリッド行までの行数
const PHOTO_ROW_HEIGHT_PT: f64 = 150.0;
const PHOTO_ROW_STRIDE: u32 = 8;

/// ワークブックを組み立ててバイト列で返す
pub fn build_report(record: &SessionRecord, photos: &PhotoSet) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Baseband Swap")?;
    write_form_sheet(worksheet, record)?;

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Photos")?;
    write_photos_sheet(worksheet, photos)?;

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Photo List")?;
    for (i, label) in PHOTO_LABELS.iter().enumerate() {
        worksheet.write_string(i as u32, 0, *label)?;
    }

    // プレースホルダ
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sheet4")?;

    Ok(workbook.save_to_buffer()?)
}

/// "Baseband Swap"シート: フォーム内容を固定セルに配置
fn write_form_sheet(worksheet: &mut Worksheet, record: &SessionRecord) -> Result<()> {
    let title_format = Format::new().set_bold().set_align(FormatAlign::Center);
    let label_format = Format::new().set_bold();
    let notes_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    // タイトル行
    worksheet.merge_range(0, 0, 0, 3, "Gen 4 BB Conversion", &title_format)?;

    // 左列: 設置場所と作業内容
    worksheet.write_string_with_format(2, 0, "Antenna Location:", &label_format)?;
    worksheet.write_string(2, 1, record.antenna_location.as_str())?;
    if record.antenna_location == AntennaLocation::Other {
        worksheet.write_string(2, 2, &record.antenna_location_other)?;
    }

    worksheet.write_string_with_format(3, 0, "Installation:", &label_format)?;
    worksheet.write_string(3, 1, &record.installation)?;

    // 右列: 現場メタデータ
    let pairs = [
        ("Site Name:", record.site_name.as_str()),
        ("Contractor:", record.contractor.as_str()),
        ("Tech Name:", record.tech_name.as_str()),
        ("Date:", record.date.as_str()),
        ("Project:", record.project.as_str()),
    ];
    for (i, (label, value)) in pairs.iter().enumerate() {
        let row = 3 + i as u32;
        worksheet.write_string_with_format(row, 2, *label, &label_format)?;
        worksheet.write_string(row, 3, *value)?;
    }

    // 備考ブロック
    worksheet.merge_range(9, 0, 9, 3, "Additional Notes", &title_format)?;
    worksheet.merge_range(10, 0, 19, 3, &record.additional_notes, &notes_format)?;

    Ok(())
}

/// "Photos"シート: 挿入順の2列グリッド
///
/// ラベルセルの直下に画像を配置し、8行間隔で次のグリッド行へ進む。
fn write_photos_sheet(worksheet: &mut Worksheet, photos: &PhotoSet) -> Result<()> {
    let label_format = Format::new().set_bold();

    worksheet.set_column_width_pixels(0, PHOTO_WIDTH_PX as u32)?;
    worksheet.set_column_width_pixels(1, PHOTO_WIDTH_PX as u32)?;

    for (i, photo) in photos.iter().enumerate() {
        let row = (i as u32 / 2) * PHOTO_ROW_STRIDE;
        let col = (i % 2) as u16;

        worksheet.write_string_with_format(row, col, &photo.label, &label_format)?;

        let image = Image::new_from_buffer(&photo.data)?
            .set_scale_to_size(PHOTO_WIDTH_PX, PHOTO_HEIGHT_PX, false)
            .set_object_movement(ObjectMovement::DontMoveOrSizeWithCells);
        worksheet.insert_image(row + 1, col, &image)?;
        worksheet.set_row_height(row + 1, PHOTO_ROW_HEIGHT_PT)?;
    }

    Ok(())
}

/// ダウンロードファイル名を現場名から組み立てる
///
/// 現場名が空の場合は汎用名にフォールバック。
pub fn report_file_name(record: &SessionRecord) -> String {
    let base = sanitize_file_stem(&record.site_name);
    let base = if base.is_empty() { "report".to_string() } else { base };
    format!("{}_VZW_documentation.xlsx", base)
}

/// 英数字以外の連続をアンダースコア1個に畳み込む
fn sanitize_file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            stem.push('_');
            last_was_sep = true;
        }
    }
    stem.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name_from_site_name() {
        let record = SessionRecord {
            site_name: "PHO_GUNPOWDER".to_string(),
            ..Default::default()
        };
        assert_eq!(report_file_name(&record), "PHO_GUNPOWDER_VZW_documentation.xlsx");
    }

    #[test]
    fn test_report_file_name_sanitizes() {
        let record = SessionRecord {
            site_name: "  PHO Gunpowder / East  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            report_file_name(&record),
            "PHO_Gunpowder_East_VZW_documentation.xlsx"
        );
    }

    #[test]
    fn test_report_file_name_fallback() {
        let record = SessionRecord {
            site_name: "".to_string(),
            ..Default::default()
        };
        assert_eq!(report_file_name(&record), "report_VZW_documentation.xlsx");

        let record = SessionRecord {
            site_name: "!!!".to_string(),
            ..Default::default()
        };
        assert_eq!(report_file_name(&record), "report_VZW_documentation.xlsx");
    }
}
