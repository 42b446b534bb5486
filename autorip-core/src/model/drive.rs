use crate::protocol::DriveScan;

/// A disc drive detected by makemkvcon, as reported by a `DRV` line with a
/// non-empty drive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    /// Drive index used to address `info disc:N` and `mkv disc:N` commands.
    pub index: usize,

    pub drive_name: String,

    pub disc_title: String,

    pub volume_name: String,
}

impl From<&DriveScan> for Drive {
    fn from(scan: &DriveScan) -> Self {
        Drive {
            index: scan.index,
            drive_name: scan.drive_name.clone(),
            disc_title: scan.disc_title.clone(),
            volume_name: scan.volume_name.clone(),
        }
    }
}
