//! Typed rows of the seven output tables.
//!
//! Values are in converted units (degrees, meters, seconds, and so on).
//! Numeric columns absent from the source message are `None`; string columns
//! default to empty. Every row carries the `file_source` it was decoded from.

use chrono::{DateTime, Utc};

pub type Timestamp = DateTime<Utc>;

/// One sample of the activity time series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub timestamp: Option<Timestamp>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Meters.
    pub altitude: Option<f64>,
    pub enhanced_altitude: Option<f64>,

    /// Meters, cumulative.
    pub distance: Option<f64>,
    /// Meters per second.
    pub speed: Option<f64>,
    pub enhanced_speed: Option<f64>,
    pub vertical_speed: Option<f64>,

    /// Watts.
    pub power: Option<u16>,
    pub motor_power: Option<u16>,
    pub accumulated_power: Option<u32>,
    pub compressed_accumulated_power: Option<u16>,

    pub heart_rate: Option<u8>,
    /// Grams per deciliter.
    pub total_hemoglobin_conc: Option<f64>,
    pub total_hemoglobin_conc_min: Option<f64>,
    pub total_hemoglobin_conc_max: Option<f64>,
    /// Percent.
    pub saturated_hemoglobin_percent: Option<f64>,
    pub saturated_hemoglobin_percent_min: Option<f64>,
    pub saturated_hemoglobin_percent_max: Option<f64>,

    pub cadence: Option<u8>,
    pub cadence256: Option<f64>,
    pub fractional_cadence: Option<f64>,

    /// Degrees Celsius.
    pub temperature: Option<i8>,
    pub core_temperature: Option<f64>,

    /// Percent.
    pub grade: Option<f64>,
    pub resistance: Option<u8>,
    pub left_right_balance: Option<u8>,
    pub left_torque_effectiveness: Option<f64>,
    pub right_torque_effectiveness: Option<f64>,
    pub left_pedal_smoothness: Option<f64>,
    pub right_pedal_smoothness: Option<f64>,
    pub combined_pedal_smoothness: Option<f64>,
    /// Millimeters.
    pub left_pco: Option<i8>,
    pub right_pco: Option<i8>,

    /// Millimeters.
    pub vertical_oscillation: Option<f64>,
    pub stance_time_percent: Option<f64>,
    /// Milliseconds.
    pub stance_time: Option<f64>,
    pub stance_time_balance: Option<f64>,
    /// Millimeters.
    pub step_length: Option<f64>,
    pub vertical_ratio: Option<f64>,

    /// Meters.
    pub cycle_length: Option<f64>,
    pub cycle_length16: Option<f64>,
    pub cycles: Option<u8>,
    pub total_cycles: Option<u32>,

    /// Seconds.
    pub time_from_course: Option<f64>,
    pub gps_accuracy: Option<u8>,

    pub calories: Option<u16>,

    pub zone: Option<u8>,
    /// The sport of the file's session, or the record's own activity type.
    pub activity_type: String,
    pub stroke_type: String,

    pub time128: Option<f64>,
    pub grit: Option<f64>,
    pub flow: Option<f64>,
    pub current_stress: Option<f64>,

    pub ebike_travel_range: Option<u16>,
    pub ebike_battery_level: Option<u8>,
    pub ebike_assist_mode: Option<u8>,
    pub ebike_assist_level_percent: Option<u8>,
    pub battery_soc: Option<f64>,

    pub ball_speed: Option<f64>,

    /// Pascals.
    pub absolute_pressure: Option<u32>,
    /// Meters.
    pub depth: Option<f64>,
    pub next_stop_depth: Option<f64>,
    /// Seconds.
    pub next_stop_time: Option<u32>,
    pub time_to_surface: Option<u32>,
    pub ndl_time: Option<u32>,
    pub cns_load: Option<u8>,
    pub n2_load: Option<u16>,
    pub air_time_remaining: Option<u32>,
    pub pressure_sac: Option<f64>,
    pub volume_sac: Option<f64>,
    pub rmv: Option<f64>,
    pub ascent_rate: Option<f64>,
    pub po2: Option<f64>,

    pub respiration_rate: Option<u8>,
    pub enhanced_respiration_rate: Option<f64>,

    pub device_index: Option<u8>,

    pub file_source: String,
}

/// Metadata and summary of one recorded activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
    /// The device serial number, or the position of the activity in its file.
    pub activity_id: u64,
    /// Always empty: FIT files carry no file identifier beyond the file id
    /// message fields already split into columns here.
    pub file_id: String,
    pub file_type: String,
    pub timestamp: Option<Timestamp>,
    /// Device local time, read as if it were UTC.
    pub local_timestamp: Option<Timestamp>,
    pub start_time: Option<Timestamp>,
    pub total_timer_time: Option<f64>,
    pub total_elapsed_time: Option<f64>,
    pub total_distance: Option<f64>,
    pub sport: String,
    pub sub_sport: String,
    pub manufacturer: String,
    pub product: String,
    pub device_serial_number: Option<u64>,
    pub software_version: String,
    pub total_calories: Option<u32>,
    pub total_ascent: Option<f64>,
    pub total_descent: Option<f64>,
    pub avg_heart_rate: Option<u8>,
    pub max_heart_rate: Option<u8>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub avg_power: Option<u16>,
    pub max_power: Option<u16>,
    pub avg_cadence: Option<u8>,
    pub max_cadence: Option<u8>,
    pub start_position_lat: Option<f64>,
    pub start_position_long: Option<f64>,
    pub end_position_lat: Option<f64>,
    pub end_position_long: Option<f64>,
    pub file_source: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub session_id: u32,
    pub activity_id: Option<u64>,
    pub timestamp: Option<Timestamp>,
    pub start_time: Option<Timestamp>,
    pub total_elapsed_time: Option<f64>,
    pub total_timer_time: Option<f64>,
    pub total_distance: Option<f64>,
    pub sport: String,
    pub sub_sport: String,
    pub total_calories: Option<u32>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub avg_heart_rate: Option<u8>,
    pub max_heart_rate: Option<u8>,
    pub min_heart_rate: Option<u8>,
    pub avg_cadence: Option<u8>,
    pub max_cadence: Option<u8>,
    pub avg_power: Option<u16>,
    pub max_power: Option<u16>,
    pub normalized_power: Option<u16>,
    pub intensity_factor: Option<f64>,
    pub training_stress_score: Option<f64>,
    /// Joules.
    pub total_work: Option<u32>,
    pub total_ascent: Option<f64>,
    pub total_descent: Option<f64>,
    pub first_lap_index: Option<u16>,
    pub num_laps: Option<u16>,
    pub event: String,
    pub event_type: String,
    pub trigger: String,
    pub start_position_lat: Option<f64>,
    pub start_position_long: Option<f64>,
    pub end_position_lat: Option<f64>,
    pub end_position_long: Option<f64>,
    pub file_source: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lap {
    pub lap_id: u32,
    pub session_id: Option<u32>,
    pub activity_id: Option<u64>,
    pub timestamp: Option<Timestamp>,
    pub start_time: Option<Timestamp>,
    pub total_elapsed_time: Option<f64>,
    pub total_timer_time: Option<f64>,
    pub total_distance: Option<f64>,
    pub total_calories: Option<u32>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub avg_heart_rate: Option<u8>,
    pub max_heart_rate: Option<u8>,
    pub min_heart_rate: Option<u8>,
    pub avg_cadence: Option<u8>,
    pub max_cadence: Option<u8>,
    pub avg_power: Option<u16>,
    pub max_power: Option<u16>,
    pub total_ascent: Option<f64>,
    pub total_descent: Option<f64>,
    pub lap_trigger: String,
    pub event: String,
    pub event_type: String,
    pub start_position_lat: Option<f64>,
    pub start_position_long: Option<f64>,
    pub end_position_lat: Option<f64>,
    pub end_position_long: Option<f64>,
    pub file_source: String,
}

/// A device or sensor that contributed to an activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Device {
    pub device_id: u32,
    pub activity_id: Option<u64>,
    pub timestamp: Option<Timestamp>,
    pub device_index: Option<u8>,
    pub device_type: String,
    pub manufacturer: String,
    pub product: String,
    pub serial_number: Option<u64>,
    pub software_version: String,
    pub hardware_version: String,
    /// Seconds.
    pub cum_operating_time: Option<u32>,
    pub battery_status: String,
    pub sensor_position: String,
    pub descriptor: String,
    pub ant_transmission_type: Option<u8>,
    pub ant_device_number: Option<u16>,
    pub ant_network: String,
    pub source_type: String,
    pub product_name: String,
    /// Volts.
    pub battery_voltage: Option<f64>,
    pub file_source: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub event_id: u32,
    pub activity_id: Option<u64>,
    pub timestamp: Option<Timestamp>,
    pub event: String,
    pub event_type: String,
    pub data: Option<u32>,
    pub data16: Option<u16>,
    pub score: Option<u16>,
    pub opponent_score: Option<u16>,
    pub front_gear_num: Option<u8>,
    pub front_gear: Option<u8>,
    pub rear_gear_num: Option<u8>,
    pub rear_gear: Option<u8>,
    pub device_index: Option<u8>,
    pub activity_type: String,
    pub start_timestamp: Option<Timestamp>,
    pub file_source: String,
}

/// A user profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub user_id: u32,
    pub friendly_name: String,
    pub gender: String,
    pub age: Option<u8>,
    /// Meters.
    pub height: Option<f64>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub language: String,
    /// Absent: user profile messages carry no time zone.
    pub time_zone: Option<i8>,
    pub activity_class: Option<f64>,
    // The lactate thresholds and maximum swimming heart rate are not user
    // profile fields, so these columns are always absent.
    pub running_lactate_threshold_hr: Option<u8>,
    pub cycling_lactate_threshold_hr: Option<u8>,
    pub swimming_lactate_threshold_hr: Option<u8>,
    pub resting_heart_rate: Option<u8>,
    pub default_max_running_hr: Option<u8>,
    pub default_max_biking_hr: Option<u8>,
    pub default_max_hr: Option<u8>,
    /// Always absent, like the lactate thresholds.
    pub default_max_swimming_hr: Option<u8>,
    pub hr_setting: String,
    pub speed_setting: String,
    pub dist_setting: String,
    pub power_setting: String,
    pub position_setting: String,
    pub temperature_setting: String,
    pub height_setting: String,
    pub weight_setting: String,
    pub local_id: Option<u16>,
    pub global_id: Option<u64>,
    /// Seconds since midnight.
    pub wake_time: Option<u32>,
    pub sleep_time: Option<u32>,
    pub file_source: String,
}

/// The seven output tables, in decode order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    pub records: Vec<Record>,
    pub activities: Vec<Activity>,
    pub sessions: Vec<Session>,
    pub laps: Vec<Lap>,
    pub devices: Vec<Device>,
    pub events: Vec<Event>,
    pub users: Vec<User>,
}

impl Tables {
    /// Move every row of `other` to the end of the matching table.
    pub fn append(&mut self, other: &mut Tables) {
        self.records.append(&mut other.records);
        self.activities.append(&mut other.activities);
        self.sessions.append(&mut other.sessions);
        self.laps.append(&mut other.laps);
        self.devices.append(&mut other.devices);
        self.events.append(&mut other.events);
        self.users.append(&mut other.users);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
            && self.activities.is_empty()
            && self.sessions.is_empty()
            && self.laps.is_empty()
            && self.devices.is_empty()
            && self.events.is_empty()
            && self.users.is_empty()
    }
}
