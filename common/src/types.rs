//! セッション状態の型定義
//!
//! Web(WASM)とネイティブテストで共有される型:
//! - SessionRecord: フォーム入力（現場メタデータ）
//! - PhotoSet: 撮影済み写真（ラベル→JPEGバイト列、挿入順を保持）
//! - Stage: 3段階ワークフローの現在位置

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// アンテナ設置場所
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AntennaLocation {
    #[default]
    Rooftop,
    Monopole,
    LatticeTower,
    Other,
}

impl AntennaLocation {
    /// ラジオボタン表示順
    pub const ALL: [AntennaLocation; 4] = [
        AntennaLocation::Rooftop,
        AntennaLocation::Monopole,
        AntennaLocation::LatticeTower,
        AntennaLocation::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AntennaLocation::Rooftop => "Rooftop",
            AntennaLocation::Monopole => "Monopole",
            AntennaLocation::LatticeTower => "Lattice Tower",
            AntennaLocation::Other => "Other",
        }
    }

    pub fn from_str_loose(value: &str) -> AntennaLocation {
        match value {
            "Monopole" => AntennaLocation::Monopole,
            "Lattice Tower" => AntennaLocation::LatticeTower,
            "Other" => AntennaLocation::Other,
            _ => AntennaLocation::Rooftop,
        }
    }
}

/// フォーム入力（1セッション分の現場メタデータ）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecord {
    pub antenna_location: AntennaLocation,

    /// 設置場所が Other の場合の自由記述
    pub antenna_location_other: String,

    pub installation: String,
    pub site_name: String,
    pub contractor: String,
    pub tech_name: String,

    /// 施工日（ISO形式 YYYY-MM-DD）
    pub date: String,

    pub project: String,
    pub additional_notes: String,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            antenna_location: AntennaLocation::default(),
            antenna_location_other: String::new(),
            installation: "Gen2/3 BB removal, Gen 4 BB install".to_string(),
            site_name: "PHO_GUNPOWDER".to_string(),
            contractor: "Integer".to_string(),
            tech_name: "Wilfred".to_string(),
            date: String::new(),
            project: "Gen 4 - BB6672 Install".to_string(),
            additional_notes: String::new(),
        }
    }
}

impl SessionRecord {
    /// 必須項目チェック（Site Name / Tech Name）
    ///
    /// 空白のみの入力は未入力扱い。
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.site_name.trim().is_empty() {
            missing.push("Site Name");
        }
        if self.tech_name.trim().is_empty() {
            missing.push("Tech Name");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(missing.join(", ")))
        }
    }
}

/// 撮影済み写真1件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedPhoto {
    pub label: String,
    pub data: Vec<u8>,
}

/// 撮影済み写真の集合
///
/// ラベルをキーとし、同一ラベルの再撮影は元の位置のまま上書きする。
/// ギャラリーとExcelの写真シートは挿入順に並ぶ。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoSet {
    photos: Vec<CapturedPhoto>,
}

impl PhotoSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// ラベルに写真を登録（既存ラベルは上書き、位置は維持）
    pub fn insert(&mut self, label: &str, data: Vec<u8>) {
        if let Some(existing) = self.photos.iter_mut().find(|p| p.label == label) {
            existing.data = data;
        } else {
            self.photos.push(CapturedPhoto {
                label: label.to_string(),
                data,
            });
        }
    }

    pub fn get(&self, label: &str) -> Option<&[u8]> {
        self.photos
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.data.as_slice())
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn clear(&mut self) {
        self.photos.clear();
    }

    /// 挿入順のイテレータ
    pub fn iter(&self) -> impl Iterator<Item = &CapturedPhoto> {
        self.photos.iter()
    }
}

/// ワークフローの段階
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Form,
    Capture,
    Export,
}

/// カメラの向き（getUserMediaのfacingMode制約に対応）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraFacing {
    Front,
    #[default]
    Back,
}

impl CameraFacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraFacing::Front => "Front",
            CameraFacing::Back => "Back",
        }
    }

    /// facingMode制約値
    pub fn constraint_value(&self) -> &'static str {
        match self {
            CameraFacing::Front => "user",
            CameraFacing::Back => "environment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_record_default() {
        let record = SessionRecord::default();
        assert_eq!(record.site_name, "PHO_GUNPOWDER");
        assert_eq!(record.contractor, "Integer");
        assert_eq!(record.tech_name, "Wilfred");
        assert_eq!(record.installation, "Gen2/3 BB removal, Gen 4 BB install");
        assert_eq!(record.project, "Gen 4 - BB6672 Install");
        assert_eq!(record.antenna_location, AntennaLocation::Rooftop);
        assert_eq!(record.additional_notes, "");
    }

    #[test]
    fn test_session_record_validate_ok() {
        let record = SessionRecord::default();
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_session_record_validate_missing_site_name() {
        let record = SessionRecord {
            site_name: "".to_string(),
            ..Default::default()
        };
        let err = record.validate().unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("Site Name"));
        assert!(!message.contains("Tech Name"));
    }

    #[test]
    fn test_session_record_validate_whitespace_only() {
        let record = SessionRecord {
            site_name: "   ".to_string(),
            tech_name: "\t".to_string(),
            ..Default::default()
        };
        let err = record.validate().unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("Site Name"));
        assert!(message.contains("Tech Name"));
    }

    #[test]
    fn test_session_record_serialize_camel_case() {
        let record = SessionRecord::default();
        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"siteName\":\"PHO_GUNPOWDER\""));
        assert!(json.contains("\"techName\":\"Wilfred\""));
        assert!(json.contains("\"antennaLocation\":"));
    }

    #[test]
    fn test_session_record_deserialize_missing_fields() {
        // 必須フィールドなしでもデフォルト値で復元できること
        let json = r#"{"siteName": "PHO_TEST"}"#;
        let record: SessionRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.site_name, "PHO_TEST");
        assert_eq!(record.tech_name, "Wilfred"); // デフォルト値
    }

    #[test]
    fn test_antenna_location_from_str_loose() {
        assert_eq!(AntennaLocation::from_str_loose("Monopole"), AntennaLocation::Monopole);
        assert_eq!(
            AntennaLocation::from_str_loose("Lattice Tower"),
            AntennaLocation::LatticeTower
        );
        assert_eq!(AntennaLocation::from_str_loose("Other"), AntennaLocation::Other);
        assert_eq!(AntennaLocation::from_str_loose("???"), AntennaLocation::Rooftop);
    }

    #[test]
    fn test_photo_set_insert_and_get() {
        let mut photos = PhotoSet::new();
        photos.insert("Pre-Installation Site Photo", vec![1, 2, 3]);
        assert_eq!(photos.len(), 1);
        assert_eq!(photos.get("Pre-Installation Site Photo"), Some(&[1u8, 2, 3][..]));
        assert_eq!(photos.get("Sector A Pre-Installation"), None);
    }

    #[test]
    fn test_photo_set_insert_overwrites_in_place() {
        let mut photos = PhotoSet::new();
        photos.insert("Sector A Pre-Installation", vec![1]);
        photos.insert("Sector B Pre-Installation", vec![2]);
        photos.insert("Sector A Pre-Installation", vec![9, 9]);

        // 上書きしても件数と順序は変わらない
        assert_eq!(photos.len(), 2);
        let labels: Vec<&str> = photos.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Sector A Pre-Installation", "Sector B Pre-Installation"]
        );
        assert_eq!(photos.get("Sector A Pre-Installation"), Some(&[9u8, 9][..]));
    }

    #[test]
    fn test_photo_set_clear() {
        let mut photos = PhotoSet::new();
        photos.insert("Equipment Serial Numbers", vec![0xFF]);
        assert!(!photos.is_empty());
        photos.clear();
        assert!(photos.is_empty());
        assert_eq!(photos.len(), 0);
    }

    #[test]
    fn test_stage_default_is_form() {
        assert_eq!(Stage::default(), Stage::Form);
    }

    #[test]
    fn test_camera_facing_constraint_value() {
        assert_eq!(CameraFacing::Front.constraint_value(), "user");
        assert_eq!(CameraFacing::Back.constraint_value(), "environment");
        assert_eq!(CameraFacing::default(), CameraFacing::Back);
    }
}
