//! Projection of decoded messages into typed rows.
//!
//! Routing is by global message number, through a static table of builders.
//! Messages outside the seven tables project to [`Row::Unknown`].

use crate::sans::data::DecodedMessage;

use super::{
    FromFields,
    names::{self, Table},
    profile::{
        ActivityMesg, DeviceInfoMesg, EventMesg, FileCreatorMesg, FileIdMesg, LapMesg, RecordMesg,
        SessionMesg, UserProfileMesg, mesg_num,
    },
    rows::{Activity, Device, Event, Lap, Record, Session, Timestamp, User},
    units::{fit_time, scale, semicircles_to_degrees},
};

/// A typed projection of one data message, before linking.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Record(Record),
    /// A new activity, identified by the file's metadata.
    FileId(Activity),
    /// Software version of the application that created the file.
    FileCreator { software_version: Option<String> },
    /// Fields of an activity message, merged into the current activity.
    Activity(ActivitySummary),
    Session(Session),
    Lap(Lap),
    Device(Device),
    Event(Event),
    User(User),
    Unknown(u16),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivitySummary {
    pub timestamp: Option<Timestamp>,
    pub local_timestamp: Option<Timestamp>,
    pub total_timer_time: Option<f64>,
}

type Builder = fn(&DecodedMessage) -> Row;

static BUILDERS: &[(u16, Builder)] = &[
    (mesg_num::FILE_ID, file_id),
    (mesg_num::USER_PROFILE, user_profile),
    (mesg_num::SESSION, session),
    (mesg_num::LAP, lap),
    (mesg_num::RECORD, record),
    (mesg_num::EVENT, event),
    (mesg_num::DEVICE_INFO, device_info),
    (mesg_num::ACTIVITY, activity),
    (mesg_num::FILE_CREATOR, file_creator),
];

/// Project a decoded message into a typed row.
pub fn dispatch(message: &DecodedMessage) -> Row {
    match BUILDERS.binary_search_by_key(&message.global, |(n, _)| *n) {
        Ok(i) => (BUILDERS[i].1)(message),
        Err(_) => Row::Unknown(message.global),
    }
}

fn time(seconds: Option<u32>) -> Option<Timestamp> {
    seconds.and_then(fit_time)
}

fn degrees(semicircles: Option<i32>) -> Option<f64> {
    semicircles.and_then(semicircles_to_degrees)
}

fn name<T: Into<u16>>(table: &Table, code: Option<T>) -> String {
    table.name_or_empty(code.map(Into::into))
}

fn version(raw: Option<u16>) -> String {
    raw.map(|v| format!("{:.2}", v as f64 / 100.0))
        .unwrap_or_default()
}

/// The product name, or the product code when no name was given.
fn product(name: Option<String>, code: Option<u16>) -> String {
    name.or_else(|| code.map(|c| c.to_string()))
        .unwrap_or_default()
}

fn file_id(message: &DecodedMessage) -> Row {
    let m = FileIdMesg::from_message(message);

    Row::FileId(Activity {
        file_type: name(&names::FILE_TYPE, m.file_type),
        timestamp: time(m.time_created),
        manufacturer: name(&names::MANUFACTURER, m.manufacturer),
        product: product(m.product_name, m.product),
        device_serial_number: m.serial_number.map(u64::from),
        ..Default::default()
    })
}

fn file_creator(message: &DecodedMessage) -> Row {
    let m = FileCreatorMesg::from_message(message);

    Row::FileCreator {
        software_version: m.software_version.map(|v| version(Some(v))),
    }
}

fn activity(message: &DecodedMessage) -> Row {
    let m = ActivityMesg::from_message(message);

    Row::Activity(ActivitySummary {
        timestamp: time(m.timestamp),
        local_timestamp: time(m.local_timestamp),
        total_timer_time: scale(m.total_timer_time, 1000.0, 0.0),
    })
}

fn session(message: &DecodedMessage) -> Row {
    let m = SessionMesg::from_message(message);

    Row::Session(Session {
        timestamp: time(m.timestamp),
        start_time: time(m.start_time),
        total_elapsed_time: scale(m.total_elapsed_time, 1000.0, 0.0),
        total_timer_time: scale(m.total_timer_time, 1000.0, 0.0),
        total_distance: scale(m.total_distance, 100.0, 0.0),
        sport: name(&names::SPORT, m.sport),
        sub_sport: name(&names::SUB_SPORT, m.sub_sport),
        total_calories: m.total_calories.map(u32::from),
        avg_speed: scale(
            m.enhanced_avg_speed.or(m.avg_speed.map(u32::from)),
            1000.0,
            0.0,
        ),
        max_speed: scale(
            m.enhanced_max_speed.or(m.max_speed.map(u32::from)),
            1000.0,
            0.0,
        ),
        avg_heart_rate: m.avg_heart_rate,
        max_heart_rate: m.max_heart_rate,
        min_heart_rate: m.min_heart_rate,
        avg_cadence: m.avg_cadence,
        max_cadence: m.max_cadence,
        avg_power: m.avg_power,
        max_power: m.max_power,
        normalized_power: m.normalized_power,
        intensity_factor: scale(m.intensity_factor, 1000.0, 0.0),
        training_stress_score: scale(m.training_stress_score, 10.0, 0.0),
        total_work: m.total_work,
        total_ascent: m.total_ascent.map(f64::from),
        total_descent: m.total_descent.map(f64::from),
        first_lap_index: m.first_lap_index,
        num_laps: m.num_laps,
        event: name(&names::EVENT, m.event),
        event_type: name(&names::EVENT_TYPE, m.event_type),
        trigger: name(&names::SESSION_TRIGGER, m.trigger),
        start_position_lat: degrees(m.start_position_lat),
        start_position_long: degrees(m.start_position_long),
        end_position_lat: degrees(m.end_position_lat),
        end_position_long: degrees(m.end_position_long),
        ..Default::default()
    })
}

fn lap(message: &DecodedMessage) -> Row {
    let m = LapMesg::from_message(message);

    Row::Lap(Lap {
        timestamp: time(m.timestamp),
        start_time: time(m.start_time),
        total_elapsed_time: scale(m.total_elapsed_time, 1000.0, 0.0),
        total_timer_time: scale(m.total_timer_time, 1000.0, 0.0),
        total_distance: scale(m.total_distance, 100.0, 0.0),
        total_calories: m.total_calories.map(u32::from),
        avg_speed: scale(
            m.enhanced_avg_speed.or(m.avg_speed.map(u32::from)),
            1000.0,
            0.0,
        ),
        max_speed: scale(
            m.enhanced_max_speed.or(m.max_speed.map(u32::from)),
            1000.0,
            0.0,
        ),
        avg_heart_rate: m.avg_heart_rate,
        max_heart_rate: m.max_heart_rate,
        min_heart_rate: m.min_heart_rate,
        avg_cadence: m.avg_cadence,
        max_cadence: m.max_cadence,
        avg_power: m.avg_power,
        max_power: m.max_power,
        total_ascent: m.total_ascent.map(f64::from),
        total_descent: m.total_descent.map(f64::from),
        lap_trigger: name(&names::LAP_TRIGGER, m.lap_trigger),
        event: name(&names::EVENT, m.event),
        event_type: name(&names::EVENT_TYPE, m.event_type),
        start_position_lat: degrees(m.start_position_lat),
        start_position_long: degrees(m.start_position_long),
        end_position_lat: degrees(m.end_position_lat),
        end_position_long: degrees(m.end_position_long),
        ..Default::default()
    })
}

fn record(message: &DecodedMessage) -> Row {
    let m = RecordMesg::from_message(message);

    Row::Record(Record {
        timestamp: time(m.timestamp),
        latitude: degrees(m.position_lat),
        longitude: degrees(m.position_long),
        altitude: scale(m.altitude, 5.0, 500.0),
        enhanced_altitude: scale(m.enhanced_altitude, 5.0, 500.0),

        distance: scale(m.distance, 100.0, 0.0),
        speed: scale(m.speed, 1000.0, 0.0),
        enhanced_speed: scale(m.enhanced_speed, 1000.0, 0.0),
        vertical_speed: scale(m.vertical_speed, 1000.0, 0.0),

        power: m.power,
        motor_power: m.motor_power,
        accumulated_power: m.accumulated_power,
        compressed_accumulated_power: m.compressed_accumulated_power,

        heart_rate: m.heart_rate,
        total_hemoglobin_conc: scale(m.total_hemoglobin_conc, 100.0, 0.0),
        total_hemoglobin_conc_min: scale(m.total_hemoglobin_conc_min, 100.0, 0.0),
        total_hemoglobin_conc_max: scale(m.total_hemoglobin_conc_max, 100.0, 0.0),
        saturated_hemoglobin_percent: scale(m.saturated_hemoglobin_percent, 10.0, 0.0),
        saturated_hemoglobin_percent_min: scale(m.saturated_hemoglobin_percent_min, 10.0, 0.0),
        saturated_hemoglobin_percent_max: scale(m.saturated_hemoglobin_percent_max, 10.0, 0.0),

        cadence: m.cadence,
        cadence256: scale(m.cadence256, 256.0, 0.0),
        fractional_cadence: scale(m.fractional_cadence, 128.0, 0.0),

        temperature: m.temperature,
        core_temperature: scale(m.core_temperature, 100.0, 0.0),

        grade: scale(m.grade, 100.0, 0.0),
        resistance: m.resistance,
        left_right_balance: m.left_right_balance,
        left_torque_effectiveness: scale(m.left_torque_effectiveness, 2.0, 0.0),
        right_torque_effectiveness: scale(m.right_torque_effectiveness, 2.0, 0.0),
        left_pedal_smoothness: scale(m.left_pedal_smoothness, 2.0, 0.0),
        right_pedal_smoothness: scale(m.right_pedal_smoothness, 2.0, 0.0),
        combined_pedal_smoothness: scale(m.combined_pedal_smoothness, 2.0, 0.0),
        left_pco: m.left_pco,
        right_pco: m.right_pco,

        vertical_oscillation: scale(m.vertical_oscillation, 10.0, 0.0),
        stance_time_percent: scale(m.stance_time_percent, 100.0, 0.0),
        stance_time: scale(m.stance_time, 10.0, 0.0),
        stance_time_balance: scale(m.stance_time_balance, 100.0, 0.0),
        step_length: scale(m.step_length, 10.0, 0.0),
        vertical_ratio: scale(m.vertical_ratio, 100.0, 0.0),

        cycle_length: scale(m.cycle_length, 100.0, 0.0),
        cycle_length16: scale(m.cycle_length16, 100.0, 0.0),
        cycles: m.cycles,
        total_cycles: m.total_cycles,

        time_from_course: scale(m.time_from_course, 1000.0, 0.0),
        gps_accuracy: m.gps_accuracy,

        calories: m.calories,

        zone: m.zone,
        activity_type: name(&names::ACTIVITY_TYPE, m.activity_type),
        stroke_type: name(&names::STROKE_TYPE, m.stroke_type),

        time128: scale(m.time128, 128.0, 0.0),
        grit: m.grit.map(f64::from),
        flow: m.flow.map(f64::from),
        current_stress: scale(m.current_stress, 100.0, 0.0),

        ebike_travel_range: m.ebike_travel_range,
        ebike_battery_level: m.ebike_battery_level,
        ebike_assist_mode: m.ebike_assist_mode,
        ebike_assist_level_percent: m.ebike_assist_level_percent,
        battery_soc: scale(m.battery_soc, 2.0, 0.0),

        ball_speed: scale(m.ball_speed, 100.0, 0.0),

        absolute_pressure: m.absolute_pressure,
        depth: scale(m.depth, 1000.0, 0.0),
        next_stop_depth: scale(m.next_stop_depth, 1000.0, 0.0),
        next_stop_time: m.next_stop_time,
        time_to_surface: m.time_to_surface,
        ndl_time: m.ndl_time,
        cns_load: m.cns_load,
        n2_load: m.n2_load,
        air_time_remaining: m.air_time_remaining,
        pressure_sac: scale(m.pressure_sac, 100.0, 0.0),
        volume_sac: scale(m.volume_sac, 100.0, 0.0),
        rmv: scale(m.rmv, 100.0, 0.0),
        ascent_rate: scale(m.ascent_rate, 1000.0, 0.0),
        po2: scale(m.po2, 100.0, 0.0),

        respiration_rate: m.respiration_rate,
        enhanced_respiration_rate: scale(m.enhanced_respiration_rate, 100.0, 0.0),

        device_index: m.device_index,

        file_source: String::new(),
    })
}

/// Source type of sensors built into the recording device.
const LOCAL_SOURCE: u8 = 5;

fn device_info(message: &DecodedMessage) -> Row {
    let m = DeviceInfoMesg::from_message(message);

    let device_types = match m.source_type {
        Some(LOCAL_SOURCE) => &names::LOCAL_DEVICE_TYPE,
        _ => &names::ANTPLUS_DEVICE_TYPE,
    };

    Row::Device(Device {
        timestamp: time(m.timestamp),
        device_index: m.device_index,
        device_type: name(device_types, m.device_type),
        manufacturer: name(&names::MANUFACTURER, m.manufacturer),
        product: product(m.product_name.clone(), m.product),
        serial_number: m.serial_number.map(u64::from),
        software_version: version(m.software_version),
        hardware_version: m
            .hardware_version
            .map(|v| v.to_string())
            .unwrap_or_default(),
        cum_operating_time: m.cum_operating_time,
        battery_status: name(&names::BATTERY_STATUS, m.battery_status),
        sensor_position: name(&names::BODY_LOCATION, m.sensor_position),
        descriptor: m.descriptor.unwrap_or_default(),
        ant_transmission_type: m.ant_transmission_type,
        ant_device_number: m.ant_device_number,
        ant_network: name(&names::ANT_NETWORK, m.ant_network),
        source_type: name(&names::SOURCE_TYPE, m.source_type),
        product_name: m.product_name.unwrap_or_default(),
        battery_voltage: scale(m.battery_voltage, 256.0, 0.0),
        ..Default::default()
    })
}

fn event(message: &DecodedMessage) -> Row {
    let m = EventMesg::from_message(message);

    Row::Event(Event {
        timestamp: time(m.timestamp),
        event: name(&names::EVENT, m.event),
        event_type: name(&names::EVENT_TYPE, m.event_type),
        data: m.data,
        data16: m.data16,
        score: m.score,
        opponent_score: m.opponent_score,
        front_gear_num: m.front_gear_num,
        front_gear: m.front_gear,
        rear_gear_num: m.rear_gear_num,
        rear_gear: m.rear_gear,
        device_index: m.device_index,
        activity_type: name(&names::ACTIVITY_TYPE, m.activity_type),
        start_timestamp: time(m.start_timestamp),
        ..Default::default()
    })
}

fn user_profile(message: &DecodedMessage) -> Row {
    let m = UserProfileMesg::from_message(message);

    Row::User(User {
        friendly_name: m.friendly_name.unwrap_or_default(),
        gender: name(&names::GENDER, m.gender),
        age: m.age,
        height: scale(m.height, 100.0, 0.0),
        weight: scale(m.weight, 10.0, 0.0),
        language: name(&names::LANGUAGE, m.language),
        activity_class: m.activity_class.map(|c| (c & 0x7F) as f64 / 10.0),
        resting_heart_rate: m.resting_heart_rate,
        default_max_running_hr: m.default_max_running_heart_rate,
        default_max_biking_hr: m.default_max_biking_heart_rate,
        default_max_hr: m.default_max_heart_rate,
        hr_setting: name(&names::DISPLAY_HEART, m.hr_setting),
        speed_setting: name(&names::DISPLAY_MEASURE, m.speed_setting),
        dist_setting: name(&names::DISPLAY_MEASURE, m.dist_setting),
        power_setting: name(&names::DISPLAY_POWER, m.power_setting),
        position_setting: name(&names::DISPLAY_POSITION, m.position_setting),
        temperature_setting: name(&names::DISPLAY_MEASURE, m.temperature_setting),
        height_setting: name(&names::DISPLAY_MEASURE, m.height_setting),
        weight_setting: name(&names::DISPLAY_MEASURE, m.weight_setting),
        local_id: m.local_id,
        global_id: m.global_id,
        wake_time: m.wake_time,
        sleep_time: m.sleep_time,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use crate::sans::data::Value;

    use super::*;

    fn message(global: u16, fields: impl IntoIterator<Item = (u8, Value)>) -> DecodedMessage {
        DecodedMessage {
            global,
            fields: fields.into_iter().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn builders_are_sorted() {
        assert!(BUILDERS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn unknown_messages() {
        assert_eq!(dispatch(&message(78, [])), Row::Unknown(78));
    }

    #[test]
    fn record_conversions() {
        let Row::Record(record) = dispatch(&message(
            mesg_num::RECORD,
            [
                (253, Value::U32(1_000_000_000)),
                (0, Value::I32(1 << 30)),
                (2, Value::U16(2600)),
                (5, Value::U32(123_456)),
                (6, Value::U16(8_250)),
                (9, Value::I16(-150)),
                (42, Value::U8(2)),
                (43, Value::U8(171)),
            ],
        )) else {
            panic!("expected a record");
        };

        assert_eq!(record.timestamp.unwrap().timestamp(), 1_631_065_600);
        assert_eq!(record.latitude, Some(90.0));
        assert_eq!(record.longitude, None);
        assert_eq!(record.altitude, Some(20.0));
        assert_eq!(record.distance, Some(1234.56));
        assert_eq!(record.speed, Some(8.25));
        assert_eq!(record.grade, Some(-1.5));
        assert_eq!(record.activity_type, "Cycling");
        assert_eq!(record.left_torque_effectiveness, Some(85.5));
        assert_eq!(record.heart_rate, None);
        assert_eq!(record.stroke_type, "");
    }

    #[test]
    fn session_prefers_enhanced_speed() {
        let Row::Session(session) = dispatch(&message(
            mesg_num::SESSION,
            [
                (5, Value::U8(2)),
                (6, Value::U8(7)),
                (9, Value::U32(150_000)),
                (14, Value::U16(5_000)),
                (124, Value::U32(5_123)),
                (15, Value::U16(9_000)),
                (35, Value::U16(855)),
                (36, Value::U16(812)),
            ],
        )) else {
            panic!("expected a session");
        };

        assert_eq!(session.sport, "Cycling");
        assert_eq!(session.sub_sport, "Road");
        assert_eq!(session.total_distance, Some(1500.0));
        assert_eq!(session.avg_speed, Some(5.123));
        assert_eq!(session.max_speed, Some(9.0));
        assert_eq!(session.training_stress_score, Some(85.5));
        assert_eq!(session.intensity_factor, Some(0.812));
    }

    #[test]
    fn device_types_depend_on_source() {
        let Row::Device(local) = dispatch(&message(
            mesg_num::DEVICE_INFO,
            [(1, Value::U8(4)), (25, Value::U8(5))],
        )) else {
            panic!("expected a device");
        };
        assert_eq!(local.device_type, "Barometer");
        assert_eq!(local.source_type, "Local");

        let Row::Device(sensor) = dispatch(&message(
            mesg_num::DEVICE_INFO,
            [
                (1, Value::U8(120)),
                (2, Value::U16(1)),
                (4, Value::U16(3_121)),
                (5, Value::U16(1_234)),
                (10, Value::U16(768)),
            ],
        )) else {
            panic!("expected a device");
        };
        assert_eq!(sensor.device_type, "Heart Rate");
        assert_eq!(sensor.manufacturer, "Garmin");
        assert_eq!(sensor.product, "3121");
        assert_eq!(sensor.software_version, "12.34");
        assert_eq!(sensor.battery_voltage, Some(3.0));
    }

    #[test]
    fn user_profile_conversions() {
        let Row::User(user) = dispatch(&message(
            mesg_num::USER_PROFILE,
            [
                (1, Value::U8(1)),
                (3, Value::U8(180)),
                (4, Value::U16(725)),
                (17, Value::U8(0x80 | 65)),
                (5, Value::U8(3)),
            ],
        )) else {
            panic!("expected a user");
        };

        assert_eq!(user.gender, "Male");
        assert_eq!(user.height, Some(1.8));
        assert_eq!(user.weight, Some(72.5));
        assert_eq!(user.activity_class, Some(6.5));
        assert_eq!(user.language, "German");

        // Columns with no user profile field.
        assert_eq!(user.time_zone, None);
        assert_eq!(user.cycling_lactate_threshold_hr, None);
        assert_eq!(user.default_max_swimming_hr, None);
    }
}
