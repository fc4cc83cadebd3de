use crate::decoded;
use crate::prelude::*;
use crate::tests::toolkit::{assert_close, decoder, reference};

const KSAN: &str = "KSAN 101651Z 21005KT 10SM CLR 21/13 A3006 RMK AO2 SLP177 T02110128";

#[test]
fn ksan() {
    let obs = decoded!(KSAN);
    assert_eq!(obs.station_id.as_str(), "KSAN");
    assert_eq!(obs.report_type, ReportType::Unknown);
    assert_eq!(
        obs.day_time,
        DayTime {
            day: 10,
            hour: 16,
            minute: 51
        }
    );
    assert_eq!(obs.epoch, Epoch::from_gregorian_utc_hms(2026, 10, 10, 16, 51, 0));
    assert!(obs.modifiers.is_empty());

    assert_eq!(obs.wind_direction(), Some(210));
    assert_eq!(obs.wind_speed(), Some(Speed::knots(5.0)));
    assert_eq!(obs.wind_gust(), None);

    assert_eq!(
        obs.visibility,
        Some(Visibility::Measured(Distance::miles(10.0)))
    );
    assert!(obs.weather.is_empty());
    assert_eq!(obs.sky.len(), 1);
    assert_eq!(obs.sky[0].coverage, Coverage::Clear);
    assert!(obs.ceiling().is_none());

    // refined by remarks
    assert_eq!(obs.temperature, Some(Temperature::celsius(21.1)));
    assert_eq!(obs.dewpoint, Some(Temperature::celsius(12.8)));

    assert_eq!(obs.altimeter, Some(Pressure::inhg(30.06)));
    assert_eq!(obs.sea_level_pressure, Some(Pressure::hpa(1017.7)));

    let remarks = obs.remarks.as_ref().unwrap();
    assert_eq!(remarks.text, "AO2 SLP177 T02110128");
    assert_eq!(
        remarks.station_type,
        Some(StationType::WithPrecipitationDiscriminator)
    );
    assert!(obs.is_automated());
    assert!(obs.unparsed.is_empty());
    assert!(obs.trend.is_none());

    let altimeter_hpa = obs.altimeter.map(|p| p.to(PressureUnit::Hectopascals).value);
    assert_close(altimeter_hpa, 1017.95, 0.01);
}

#[test]
fn determinism() {
    let first = decoded!(KSAN);
    for _ in 0..10 {
        assert_eq!(decoded!(KSAN), first);
    }
}

#[test]
fn parallel_decoding() {
    let decoder = decoder();
    let reports = [
        KSAN,
        "METAR LFPG 170930Z 24012G22KT 9999 -RA BKN014 OVC030 12/10 Q1009",
        "SPECI KJFK 171856Z 31015G25KT 3SM +TSRA BKN008CB 18/17 A2981",
    ];
    let decoded: Vec<Observation> = std::thread::scope(|scope| {
        let handles = reports
            .iter()
            .map(|report| scope.spawn(move || decoder.decode(report).unwrap()))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    for (report, obs) in reports.iter().zip(decoded.iter()) {
        assert_eq!(&decoder.decode(report).unwrap(), obs);
    }
}

#[test]
fn body_temperatures_without_remarks() {
    let obs = decoded!("KSAN 101651Z 21005KT 10SM CLR 21/13 A3006");
    assert_eq!(obs.temperature, Some(Temperature::celsius(21.0)));
    assert_eq!(obs.dewpoint, Some(Temperature::celsius(13.0)));
    assert_eq!(obs.sea_level_pressure, None);
    assert_eq!(obs.remarks, None);

    let obs = decoded!("KSAN 101651Z 21005KT 10SM CLR M02/M04 A3006 RMK AO2 T10171039");
    assert_eq!(obs.temperature, Some(Temperature::celsius(-1.7)));
    assert_eq!(obs.dewpoint, Some(Temperature::celsius(-3.9)));
}

#[test]
fn absent_groups() {
    let obs = decoded!("KSAN 101651Z");
    assert!(obs.wind.is_none());
    assert!(obs.visibility.is_none());
    assert!(obs.sky.is_empty());
    assert!(obs.weather.is_empty());
    assert!(obs.temperature.is_none());
    assert!(obs.dewpoint.is_none());
    assert!(obs.altimeter.is_none());
    assert!(obs.sea_level_pressure.is_none());
    assert!(obs.remarks.is_none());
    assert!(!obs.is_automated());

    // not reported differs from clear sky
    let clear = decoded!("KSAN 101651Z SKC");
    assert_eq!(clear.sky[0].coverage, Coverage::SkyClear);
    assert_ne!(format_sky(&obs.sky), format_sky(&clear.sky));
}

#[test]
fn malformed_wind_is_skipped() {
    let obs = decoded!("KSAN 101651Z XXXXXKT 10SM CLR 21/13 A3006");
    assert!(obs.wind.is_none());
    assert_eq!(obs.wind_direction(), None);
    assert_eq!(obs.wind_speed(), None);
    assert_eq!(obs.unparsed, vec!["XXXXXKT".to_string()]);
    // following groups are still decoded
    assert_eq!(
        obs.visibility,
        Some(Visibility::Measured(Distance::miles(10.0)))
    );
    assert_eq!(obs.altimeter, Some(Pressure::inhg(30.06)));

    let obs = decoded!("KSAN 101651Z 48005KT 10SM");
    assert!(obs.wind.is_none());
}

#[test]
fn fatal_header_errors() {
    let decoder = decoder();
    assert_eq!(decoder.decode(""), Err(ParsingError::EmptyReport));
    assert_eq!(decoder.decode("METAR"), Err(ParsingError::MissingStation));
    assert_eq!(
        decoder.decode("KS4N5 101651Z 21005KT"),
        Err(ParsingError::InvalidStation("KS4N5".to_string()))
    );
    assert_eq!(
        decoder.decode("101651Z 21005KT 10SM"),
        Err(ParsingError::InvalidStation("101651Z".to_string()))
    );
    assert_eq!(decoder.decode("KSAN"), Err(ParsingError::MissingTime));
    assert_eq!(
        decoder.decode("KSAN 21005KT 10SM CLR"),
        Err(ParsingError::InvalidTime("21005KT".to_string()))
    );
    assert_eq!(
        decoder.decode("KSAN 102551Z 21005KT"),
        Err(ParsingError::InvalidTime("102551Z".to_string()))
    );
    assert_eq!(
        decoder.decode("KSAN 321651Z 21005KT"),
        Err(ParsingError::InvalidTime("321651Z".to_string()))
    );
}

#[test]
fn month_year_context() {
    // day past reference day: previous month
    let obs = decoded!("KSAN 301651Z 21005KT");
    assert_eq!(obs.epoch, Epoch::from_gregorian_utc_hms(2026, 9, 30, 16, 51, 0));

    let decoder = Decoder::default().with_month_year(2024, 2);
    let obs = decoder.decode("KSAN 291200Z 21005KT").unwrap();
    assert_eq!(obs.epoch, Epoch::from_gregorian_utc_hms(2024, 2, 29, 12, 0, 0));

    assert_eq!(
        decoder.decode("KSAN 301200Z 21005KT"),
        Err(ParsingError::DateResolution)
    );

    // 31st while reference is in october: resolves in september, which has 30 days
    let decoder = Decoder::default().with_reference(reference());
    assert_eq!(
        decoder.decode("KSAN 311200Z"),
        Err(ParsingError::DateResolution)
    );
}

#[test]
fn strict_decoding() {
    let decoder = decoder().strict(true);
    assert!(decoder.decode(KSAN).is_ok());
    assert_eq!(
        decoder.decode("KSAN 101651Z XXXXXKT 10SM CLR 21/13 A3006 ZZZ"),
        Err(ParsingError::UnparsedGroups(vec![
            "XXXXXKT".to_string(),
            "ZZZ".to_string()
        ]))
    );
    // station specific remarks are always tolerated
    assert!(decoder
        .decode("KSAN 101651Z 21005KT 10SM CLR 21/13 A3006 RMK AO2 FROPA $")
        .is_ok());
}

#[test]
fn report_types_and_modifiers() {
    let obs = decoded!("METAR KSAN 101651Z AUTO 21005KT");
    assert_eq!(obs.report_type, ReportType::Metar);
    assert_eq!(obs.modifiers, vec![Modifier::Auto]);
    assert!(obs.is_automated());

    let obs = decoded!("SPECI KSAN 101651Z COR 21005KT");
    assert_eq!(obs.report_type, ReportType::Speci);
    assert_eq!(obs.modifiers, vec![Modifier::Corrected]);

    let obs = decoded!("KSAN 101651Z NIL");
    assert_eq!(obs.modifiers, vec![Modifier::Nil]);
}

#[test]
fn european_report() {
    let obs = decoded!(
        "METAR LFPG 170930Z 24012G22KT 210V270 9999 R27L/P1500 -RA BKN014 OVC030 12/10 Q1009 NOSIG"
    );
    assert_eq!(obs.station_id.as_str(), "LFPG");
    let wind = obs.wind.unwrap();
    assert_eq!(wind.direction, Some(WindDirection::Degrees(240)));
    assert_eq!(wind.speed, Some(Speed::knots(12.0)));
    assert_eq!(wind.gust, Some(Speed::knots(22.0)));
    assert_eq!(wind.variable_sector, Some(WindSector { from: 210, to: 270 }));
    assert_eq!(
        obs.visibility,
        Some(Visibility::AtLeast(Distance::meters(10_000.0)))
    );
    assert_eq!(obs.weather.len(), 1);
    assert_eq!(obs.weather[0].intensity, Intensity::Light);
    assert_eq!(obs.weather[0].phenomena, vec![Phenomenon::Rain]);
    assert_eq!(obs.sky.len(), 2);
    let ceiling = obs.ceiling().unwrap();
    assert_eq!(ceiling.coverage, Coverage::Broken);
    assert_eq!(ceiling.height, Some(Distance::feet(1400.0)));
    assert_eq!(obs.temperature, Some(Temperature::celsius(12.0)));
    assert_eq!(obs.dewpoint, Some(Temperature::celsius(10.0)));
    assert_eq!(obs.altimeter, Some(Pressure::hpa(1009.0)));
    assert_eq!(obs.trend.as_deref(), Some("NOSIG"));
    assert!(obs.unparsed.is_empty());
}

#[test]
fn trend_is_not_decoded() {
    let obs = decoded!("EGLL 171020Z 27010KT CAVOK 15/08 Q1021 TEMPO 4000 -SHRA BKN020 RMK SLP229");
    assert_eq!(obs.visibility, Some(Visibility::Cavok));
    assert!(obs.weather.is_empty());
    assert!(obs.sky.is_empty());
    assert_eq!(obs.trend.as_deref(), Some("TEMPO 4000 -SHRA BKN020"));
    assert_eq!(obs.sea_level_pressure, Some(Pressure::hpa(1022.9)));
}

#[test]
fn thunderstorm_report() {
    let obs = decoded!(
        "SPECI KJFK 171856Z 31015G25KT 1 1/2SM R04R/2600FT +TSRA BR FEW005 BKN008CB OVC015 18/17 A2981 RMK AO2 PK WND 30035/1850 P0045 T01830172"
    );
    assert_eq!(obs.wind_gust(), Some(Speed::knots(25.0)));
    assert_eq!(
        obs.visibility,
        Some(Visibility::Measured(Distance::miles(1.5)))
    );
    assert_eq!(obs.weather.len(), 2);
    assert_eq!(
        format_weather(&obs.weather),
        "heavy thunderstorm rain; mist"
    );
    assert_eq!(obs.sky.len(), 3);
    assert_eq!(obs.sky[1].cloud, Some(CloudType::Cumulonimbus));
    assert_eq!(
        format_sky(&obs.sky),
        "a few clouds at 500 feet; broken cumulonimbus at 800 feet; overcast at 1500 feet"
    );
    assert_eq!(obs.temperature, Some(Temperature::celsius(18.3)));
    assert_eq!(obs.dewpoint, Some(Temperature::celsius(17.2)));
    let remarks = obs.remarks.as_ref().unwrap();
    assert_eq!(
        remarks.hourly_precipitation,
        Some(Distance::new(0.45, DistanceUnit::Inches))
    );
    assert_eq!(remarks.sea_level_pressure, None);
    assert!(obs.unparsed.is_empty());
}

#[test]
fn variable_and_calm_winds() {
    let obs = decoded!("KSAN 101651Z VRB03KT 10SM CLR");
    assert_eq!(
        obs.wind.and_then(|wind| wind.direction),
        Some(WindDirection::Variable)
    );
    assert_eq!(obs.wind_direction(), None);
    assert_eq!(obs.wind_speed(), Some(Speed::knots(3.0)));

    let obs = decoded!("KSAN 101651Z 00000KT 10SM CLR");
    assert!(obs.wind.unwrap().is_calm());
    assert_eq!(obs.wind_direction(), Some(0));

    let obs = decoded!("UUEE 101651Z 18005MPS 9999 SCT020 M05/M08 Q1030");
    assert_eq!(
        obs.wind_speed(),
        Some(Speed::new(5.0, SpeedUnit::MetersPerSecond))
    );
    assert_eq!(obs.temperature, Some(Temperature::celsius(-5.0)));
}

#[test]
fn end_of_message_marker() {
    let obs = decoded!("LFPG 170930Z 24012KT 9999 FEW020 12/10 Q1009=");
    assert_eq!(obs.altimeter, Some(Pressure::hpa(1009.0)));
    assert!(obs.unparsed.is_empty());
}

#[test]
fn from_str() {
    use std::str::FromStr;
    // current month & year context: only check the header
    let obs = Observation::from_str("KSAN 011651Z 21005KT").unwrap();
    assert_eq!(obs.station_id.as_str(), "KSAN");
    assert_eq!(obs.day_time.day, 1);
    assert!(Observation::from_str("K 011651Z").is_err());
}
