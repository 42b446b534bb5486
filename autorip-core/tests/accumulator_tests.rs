//! Accumulator behavior over fixture byte streams, without a real
//! makemkvcon process.

use autorip_core::external::accumulate::{collect_disc, collect_drives, drain};
use autorip_core::protocol::parse_lines;
use autorip_core::{Attr, CoreError, Line};
use std::io::Cursor;

fn lines(fixture: &str) -> impl Iterator<Item = Result<Line, CoreError>> + '_ {
    parse_lines(Cursor::new(fixture))
}

#[test]
fn test_collect_drives_filters_absent_drives() {
    let fixture = concat!(
        "MSG:1005,0,1,\"MakeMKV started\",\"%1\",\"MakeMKV started\"\n",
        "DRV:0,2,999,12,\"BD-RE HL-DT-ST\",\"MOVIE_DISC\",\"/dev/sr0\"\n",
        "DRV:1,256,999,0,\"\",\"\",\"\"\n",
    );

    let drives = collect_drives(lines(fixture), |_| {}).unwrap();
    assert_eq!(drives.len(), 1);
    assert_eq!(drives[0].index, 0);
    assert_eq!(drives[0].drive_name, "BD-RE HL-DT-ST");
    assert_eq!(drives[0].disc_title, "MOVIE_DISC");
    assert_eq!(drives[0].volume_name, "/dev/sr0");
}

#[test]
fn test_collect_drives_only_absent_drives_is_empty() {
    let fixture = "DRV:0,256,999,0,\"\",\"\",\"\"\n";
    let drives = collect_drives(lines(fixture), |_| {}).unwrap();
    assert!(drives.is_empty());
}

#[test]
fn test_collect_disc_end_to_end() {
    let fixture = concat!(
        "TCOUNT:2\n",
        "CINFO:2,0,\"MOVIE_DISC\"\n",
        "CINFO:32,0,\"MOVIE_DISC_VOL\"\n",
        "TINFO:0,2,0,\"Main Feature\"\n",
        "TINFO:0,9,0,\"1:32:28\"\n",
        "TINFO:1,2,0,\"Extras\"\n",
        "TINFO:1,9,0,\"0:14:02\"\n",
        "SINFO:0,0,1,6201,\"Video\"\n",
        "SINFO:0,0,5,0,\"V_MPEG4/ISO/AVC\"\n",
        "SINFO:1,0,1,6202,\"Audio\"\n",
    );

    let disc = collect_disc(lines(fixture), |_| {}).unwrap();
    assert_eq!(disc.title_count(), 2);
    assert_eq!(disc.info.attr(Attr::Name).unwrap(), "MOVIE_DISC");
    assert_eq!(disc.info.attr(Attr::VolumeName).unwrap(), "MOVIE_DISC_VOL");

    let main = &disc.titles[0];
    assert_eq!(main.info.attr(Attr::Name).unwrap(), "Main Feature");
    assert_eq!(
        main.info.attr_duration(Attr::Duration).unwrap().as_secs(),
        5548
    );
    assert_eq!(main.stream_count(), 1);
    assert_eq!(
        main.streams[0].info.attr(Attr::CodecId).unwrap(),
        "V_MPEG4/ISO/AVC"
    );

    assert_eq!(disc.titles[1].info.attr(Attr::Name).unwrap(), "Extras");
    assert_eq!(disc.titles[1].stream_count(), 1);
}

#[test]
fn test_collect_disc_sparse_title_arrival() {
    // Title 2 arrives before titles 0 and 1 are ever mentioned.
    let fixture = "TINFO:2,9,0,\"1:32:28\"\n";

    let disc = collect_disc(lines(fixture), |_| {}).unwrap();
    assert_eq!(disc.title_count(), 3);
    for (i, title) in disc.titles.iter().enumerate() {
        assert_eq!(title.index, i);
    }
    assert!(disc.titles[0].info.is_empty());
    assert!(disc.titles[1].info.is_empty());
    assert_eq!(
        disc.titles[2].info.attr(Attr::Duration).unwrap(),
        "1:32:28"
    );
}

#[test]
fn test_collect_disc_zero_titles_is_valid() {
    let fixture = "TCOUNT:0\nCINFO:2,0,\"EMPTY_DISC\"\n";
    let disc = collect_disc(lines(fixture), |_| {}).unwrap();
    assert_eq!(disc.title_count(), 0);
}

#[test]
fn test_collect_disc_recovers_from_parse_failures() {
    let fixture = concat!(
        "CINFO:2,0,\"MOVIE_DISC\"\n",
        "complete garbage with no colon\n",
        "TINFO:0,9,0,\"1:00:00\"\n",
    );

    let disc = collect_disc(lines(fixture), |_| {}).unwrap();
    assert_eq!(disc.title_count(), 1);
    assert_eq!(disc.info.attr(Attr::Name).unwrap(), "MOVIE_DISC");
}

#[test]
fn test_observer_sees_telemetry_lines() {
    let fixture = concat!(
        "PRGT:5018,0,\"Opening disc\"\n",
        "PRGC:5019,0,\"Reading TOC\"\n",
        "PRGV:100,200,65536\n",
        "TINFO:0,9,0,\"1:00:00\"\n",
    );

    let mut seen = Vec::new();
    let disc = collect_disc(lines(fixture), |line| {
        seen.push(std::mem::discriminant(line));
    })
    .unwrap();

    assert_eq!(seen.len(), 4);
    assert_eq!(disc.title_count(), 1);
}

#[test]
fn test_drain_surfaces_nothing_on_success() {
    let fixture = "PRGV:65536,65536,65536\nMSG:5003,0,0,\"Done\",\"Done\"\n";
    let mut count = 0;
    drain(lines(fixture), |_| count += 1).unwrap();
    assert_eq!(count, 2);
}
