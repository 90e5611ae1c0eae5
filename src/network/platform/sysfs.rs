//! Linux sysfs readers for wireless status and interface classification.

use std::fs;
use std::path::{Path, PathBuf};

use crate::address::normalize_address;
use crate::network::QueryError;

const SYS_CLASS_NET: &str = "/sys/class/net";
const SYS_VIRTUAL_NET: &str = "/sys/devices/virtual/net";

/// Reads the self-reported hardware address of the first wireless interface.
pub fn wireless_hardware_address() -> Result<Option<String>, QueryError> {
    wireless_hardware_address_in(Path::new(SYS_CLASS_NET))
}

/// Returns true if sysfs marks `name` as a wireless interface.
pub fn is_wireless(name: &str) -> bool {
    is_wireless_dir(&Path::new(SYS_CLASS_NET).join(name))
}

/// Returns true if `name` is a virtual (non-device-backed) interface.
pub fn is_virtual(name: &str) -> bool {
    Path::new(SYS_VIRTUAL_NET).join(name).exists()
}

fn is_wireless_dir(dir: &Path) -> bool {
    dir.join("wireless").is_dir() || dir.join("phy80211").exists()
}

/// Scans `root` (laid out like `/sys/class/net`) for wireless interfaces in
/// name order and returns the first non-empty `address` file contents.
fn wireless_hardware_address_in(root: &Path) -> Result<Option<String>, QueryError> {
    let entries =
        fs::read_dir(root).map_err(|e| QueryError::io(root.display().to_string(), e))?;

    let mut wireless: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|dir| is_wireless_dir(dir))
        .collect();
    wireless.sort();

    for dir in wireless {
        let path = dir.join("address");
        let content = fs::read_to_string(&path)
            .map_err(|e| QueryError::io(path.display().to_string(), e))?;
        let address = normalize_address(&content);
        if !address.is_empty() {
            return Ok(Some(address));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn add_interface(root: &Path, name: &str, address: &str, wireless: bool) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("address"), address).unwrap();
        if wireless {
            fs::create_dir(dir.join("wireless")).unwrap();
        }
    }

    #[test]
    fn reads_wireless_interface_address() {
        let root = tempdir().unwrap();
        add_interface(root.path(), "eth0", "11:22:33:44:55:66\n", false);
        add_interface(root.path(), "wlan0", "AA:BB:CC:DD:EE:FF\n", true);

        let address = wireless_hardware_address_in(root.path()).unwrap();

        assert_eq!(address.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
    }

    #[test]
    fn none_without_wireless_interfaces() {
        let root = tempdir().unwrap();
        add_interface(root.path(), "eth0", "11:22:33:44:55:66\n", false);

        assert_eq!(wireless_hardware_address_in(root.path()).unwrap(), None);
    }

    #[test]
    fn first_wireless_by_name_wins() {
        let root = tempdir().unwrap();
        add_interface(root.path(), "wlp3s0", "22:22:22:22:22:22\n", true);
        add_interface(root.path(), "wlan1", "11:11:11:11:11:11\n", true);

        let address = wireless_hardware_address_in(root.path()).unwrap();

        assert_eq!(address.as_deref(), Some("11:11:11:11:11:11"));
    }

    #[test]
    fn empty_address_file_is_skipped() {
        let root = tempdir().unwrap();
        add_interface(root.path(), "wlan0", "\n", true);
        add_interface(root.path(), "wlan1", "33:33:33:33:33:33\n", true);

        let address = wireless_hardware_address_in(root.path()).unwrap();

        assert_eq!(address.as_deref(), Some("33:33:33:33:33:33"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let root = tempdir().unwrap();
        let missing = root.path().join("absent");

        let result = wireless_hardware_address_in(&missing);

        assert!(matches!(result, Err(QueryError::Io { .. })));
    }
}
