//! Integration tests for loading and normalizing exported sheets.

use itaipu_data::records::{NetPosition, PmixRecord, RiskYearRecord};
use itaipu_data::{DataDirectory, DataError, Dataset, normalize};

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("itaipu-sheet-tests").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
async fn test_net_sheet_loads_and_normalizes() {
    let dir = scratch_dir("net");
    std::fs::write(
        dir.join(Dataset::Net.file_name()),
        "year,month,maturation,energySourceDescription,submarketDescription,netVolume,MtM,profitLoss\n\
         2025,3,M+1,Convencional,SE,10.5,-200,35\n\
         2025,4,M+1,Convencional,S,abc,100,\n",
    )
    .unwrap();

    let rows = DataDirectory::new(&dir).load(Dataset::Net).await.unwrap();
    let positions: Vec<NetPosition> = normalize(&rows);

    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].month, 3);
    assert_eq!(positions[0].submarket, "SE");
    assert_eq!(positions[0].net_volume, 10.5);
    // Garbage and missing numeric cells become 0, never NaN.
    assert_eq!(positions[1].net_volume, 0.0);
    assert_eq!(positions[1].profit_loss, 0.0);
    assert!(!positions[1].net_volume.is_nan());
}

#[tokio::test]
async fn test_yearly_risk_sheet_with_spaced_headers() {
    let dir = scratch_dir("risk-year");
    std::fs::write(
        dir.join(Dataset::DownsideRiskYear.file_name()),
        "year, VaR_total , CVaR_total , mtm , faceValue \n2025,-900,-1200,1500,80000\n",
    )
    .unwrap();

    let rows = DataDirectory::new(&dir)
        .load(Dataset::DownsideRiskYear)
        .await
        .unwrap();
    let records: Vec<RiskYearRecord> = normalize(&rows);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].year, 2025);
    assert_eq!(records[0].var_total, -900.0);
    assert_eq!(records[0].mtm, 1500.0);
    assert_eq!(records[0].face_value, 80000.0);
}

#[tokio::test]
async fn test_pmix_sheet_legacy_volume_column() {
    let dir = scratch_dir("pmix");
    std::fs::write(
        dir.join(Dataset::Pmix.file_name()),
        "year,month,buyPmix,sellPmix,netVolumn\n2025,1,180.2,195.7,42\n",
    )
    .unwrap();

    let rows = DataDirectory::new(&dir).load(Dataset::Pmix).await.unwrap();
    let records: Vec<PmixRecord> = normalize(&rows);

    assert_eq!(records[0].net_volume, 42.0);
    assert_eq!(records[0].buy_pmix, 180.2);
}

#[tokio::test]
async fn test_load_many_is_fail_fast() {
    let dir = scratch_dir("partial-bulk");
    std::fs::write(dir.join(Dataset::Net.file_name()), "year,month\n2025,1\n").unwrap();

    let err = DataDirectory::new(&dir)
        .load_many(&[Dataset::Net, Dataset::Pmix])
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::MissingDataset { .. }));
}
