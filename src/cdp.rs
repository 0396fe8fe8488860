//! Parser for "show cdp neighbors detail" output.

use crate::capture::Capture;
use crate::interface_name::normalize;
use crate::types::NeighborRecord;

const DEVICE_ID: &str = "Device ID:";
const INTERFACE: &str = "Interface:";
const PORT_ID: &str = "Port ID (outgoing port):";
const IP_ADDRESS: &str = "IP address:";

/// Extract one neighbor record per "Device ID:" line, in capture order.
///
/// The lines following a "Device ID:" up to the next blank line belong to
/// that neighbor.
pub(crate) fn parse_cdp_neighbors(capture: &Capture) -> Vec<NeighborRecord> {
    let lines = capture.lines();

    lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let (_, device) = line.split_once(DEVICE_ID)?;
            Some(parse_neighbor(device.trim(), &lines[idx + 1..]))
        })
        .collect()
}

fn parse_neighbor(device: &str, block: &[String]) -> NeighborRecord {
    let mut local_port = "";
    let mut neighbor_port = "";
    let mut neighbor_ip = "";

    for line in block {
        if line.contains(INTERFACE) {
            if let Some((local, remote)) = line.split_once(',') {
                local_port = after(local, INTERFACE);
                neighbor_port = after(remote, PORT_ID);
            }
        } else if line.contains(IP_ADDRESS) {
            neighbor_ip = after(line, IP_ADDRESS);
        } else if line.trim().is_empty() {
            break;
        }
    }

    NeighborRecord {
        local_port: normalize(local_port),
        neighbor_device: device.to_string(),
        neighbor_ip: neighbor_ip.to_string(),
        neighbor_port: neighbor_port.to_string(),
    }
}

/// Trimmed text following `label`, or the whole trimmed text if the label is absent.
fn after<'a>(text: &'a str, label: &str) -> &'a str {
    text.split_once(label)
        .map_or(text, |(_, value)| value)
        .trim()
}

#[cfg(test)]
mod tests {
    use crate::capture::Capture;
    use crate::cdp::parse_cdp_neighbors;
    use crate::types::NeighborRecord;

    const DETAIL: &str = r#"SW1#show cdp neighbors detail
-------------------------
Device ID: DIST-SW02.example.local
Entry address(es):
  IP address: 10.10.0.2
Platform: cisco WS-C3850-24T,  Capabilities: Switch IGMP
Interface: GigabitEthernet1/0/48,  Port ID (outgoing port): GigabitEthernet1/0/1
Holdtime : 131 sec

Version :
Cisco IOS Software, IOS-XE Software

-------------------------
Device ID: SEP001122334455
Entry address(es):
  IP address: 10.20.0.15
Platform: Cisco IP Phone 7841,  Capabilities: Host Phone Two-port Mac Relay
Interface: FastEthernet0/7,  Port ID (outgoing port): Port 1
Holdtime : 163 sec

Management address(es):
  IP address: 10.99.0.15

SW1#
"#;

    #[test]
    fn parse_detail_output() {
        let neighbors = parse_cdp_neighbors(&Capture::from(DETAIL));

        assert_eq!(
            neighbors,
            vec![
                NeighborRecord {
                    local_port: "Gi1/0/48".to_string(),
                    neighbor_device: "DIST-SW02.example.local".to_string(),
                    neighbor_ip: "10.10.0.2".to_string(),
                    neighbor_port: "GigabitEthernet1/0/1".to_string(),
                },
                NeighborRecord {
                    local_port: "Fa0/7".to_string(),
                    neighbor_device: "SEP001122334455".to_string(),
                    neighbor_ip: "10.20.0.15".to_string(),
                    neighbor_port: "Port 1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn blank_line_ends_neighbor_block() {
        let capture = Capture::from(
            "Device ID: R1\n\
             \n\
             Interface: GigabitEthernet0/1,  Port ID (outgoing port): GigabitEthernet0/0\n\
             IP address: 192.0.2.1\n",
        );

        assert_eq!(
            parse_cdp_neighbors(&capture),
            vec![NeighborRecord {
                local_port: "".to_string(),
                neighbor_device: "R1".to_string(),
                neighbor_ip: "".to_string(),
                neighbor_port: "".to_string(),
            }]
        );
    }

    #[test]
    fn state_does_not_leak_between_blocks() {
        let capture = Capture::from(
            "Device ID: R1\n\
             Interface: GigabitEthernet0/1,  Port ID (outgoing port): Gi0/0\n\
             IP address: 192.0.2.1\n\
             \n\
             Device ID: R2\n\
             Holdtime : 120 sec\n",
        );

        let neighbors = parse_cdp_neighbors(&capture);

        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[1].neighbor_device, "R2");
        assert_eq!(neighbors[1].local_port, "");
        assert_eq!(neighbors[1].neighbor_ip, "");
        assert_eq!(neighbors[1].neighbor_port, "");
    }

    #[test]
    fn interface_line_without_comma_is_ignored() {
        let capture = Capture::from("Device ID: R1\nInterface: GigabitEthernet0/1\n");

        let neighbors = parse_cdp_neighbors(&capture);

        assert_eq!(neighbors[0].local_port, "");
        assert_eq!(neighbors[0].neighbor_port, "");
    }

    #[test]
    fn missing_port_id_label_keeps_segment() {
        let capture = Capture::from("Device ID: R1\nInterface: FastEthernet0/2, Gi0/3\n");

        let neighbors = parse_cdp_neighbors(&capture);

        assert_eq!(neighbors[0].local_port, "Fa0/2");
        assert_eq!(neighbors[0].neighbor_port, "Gi0/3");
    }

    #[test]
    fn no_neighbors() {
        assert!(parse_cdp_neighbors(&Capture::from("SW1#show cdp neighbors detail\nSW1#\n")).is_empty());
    }
}
