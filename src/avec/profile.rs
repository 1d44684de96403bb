//! Raw fields of the profile messages projected into tables.
//!
//! Each struct receives field values exactly as decoded, before scaling or
//! conversion. Enumerated fields are held as codes.

use crate::sans::data::Value;

use super::FromFields;

/// Global message numbers.
pub mod mesg_num {
    pub const FILE_ID: u16 = 0;
    pub const USER_PROFILE: u16 = 3;
    pub const SESSION: u16 = 18;
    pub const LAP: u16 = 19;
    pub const RECORD: u16 = 20;
    pub const EVENT: u16 = 21;
    pub const DEVICE_INFO: u16 = 23;
    pub const ACTIVITY: u16 = 34;
    pub const FILE_CREATOR: u16 = 49;
}

#[derive(Debug, Default, FromFields)]
pub struct FileIdMesg {
    #[field(0)]
    pub file_type: Option<u8>,
    #[field(1)]
    pub manufacturer: Option<u16>,
    #[field(2)]
    pub product: Option<u16>,
    #[field(3)]
    pub serial_number: Option<u32>,
    #[field(4)]
    pub time_created: Option<u32>,
    #[field(8)]
    pub product_name: Option<String>,
}

#[derive(Debug, Default, FromFields)]
pub struct FileCreatorMesg {
    #[field(0)]
    pub software_version: Option<u16>,
    #[field(1)]
    pub hardware_version: Option<u8>,
}

#[derive(Debug, Default, FromFields)]
pub struct ActivityMesg {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub total_timer_time: Option<u32>,
    #[field(5)]
    pub local_timestamp: Option<u32>,
}

#[derive(Debug, Default, FromFields)]
pub struct SessionMesg {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub event: Option<u8>,
    #[field(1)]
    pub event_type: Option<u8>,
    #[field(2)]
    pub start_time: Option<u32>,
    #[field(3)]
    pub start_position_lat: Option<i32>,
    #[field(4)]
    pub start_position_long: Option<i32>,
    #[field(5)]
    pub sport: Option<u8>,
    #[field(6)]
    pub sub_sport: Option<u8>,
    #[field(7)]
    pub total_elapsed_time: Option<u32>,
    #[field(8)]
    pub total_timer_time: Option<u32>,
    #[field(9)]
    pub total_distance: Option<u32>,
    #[field(11)]
    pub total_calories: Option<u16>,
    #[field(14)]
    pub avg_speed: Option<u16>,
    #[field(15)]
    pub max_speed: Option<u16>,
    #[field(16)]
    pub avg_heart_rate: Option<u8>,
    #[field(17)]
    pub max_heart_rate: Option<u8>,
    #[field(18)]
    pub avg_cadence: Option<u8>,
    #[field(19)]
    pub max_cadence: Option<u8>,
    #[field(20)]
    pub avg_power: Option<u16>,
    #[field(21)]
    pub max_power: Option<u16>,
    #[field(22)]
    pub total_ascent: Option<u16>,
    #[field(23)]
    pub total_descent: Option<u16>,
    #[field(25)]
    pub first_lap_index: Option<u16>,
    #[field(26)]
    pub num_laps: Option<u16>,
    #[field(28)]
    pub trigger: Option<u8>,
    #[field(34)]
    pub normalized_power: Option<u16>,
    #[field(35)]
    pub training_stress_score: Option<u16>,
    #[field(36)]
    pub intensity_factor: Option<u16>,
    #[field(38)]
    pub end_position_lat: Option<i32>,
    #[field(39)]
    pub end_position_long: Option<i32>,
    #[field(48)]
    pub total_work: Option<u32>,
    #[field(64)]
    pub min_heart_rate: Option<u8>,
    #[field(124)]
    pub enhanced_avg_speed: Option<u32>,
    #[field(125)]
    pub enhanced_max_speed: Option<u32>,
}

#[derive(Debug, Default, FromFields)]
pub struct LapMesg {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub event: Option<u8>,
    #[field(1)]
    pub event_type: Option<u8>,
    #[field(2)]
    pub start_time: Option<u32>,
    #[field(3)]
    pub start_position_lat: Option<i32>,
    #[field(4)]
    pub start_position_long: Option<i32>,
    #[field(5)]
    pub end_position_lat: Option<i32>,
    #[field(6)]
    pub end_position_long: Option<i32>,
    #[field(7)]
    pub total_elapsed_time: Option<u32>,
    #[field(8)]
    pub total_timer_time: Option<u32>,
    #[field(9)]
    pub total_distance: Option<u32>,
    #[field(11)]
    pub total_calories: Option<u16>,
    #[field(13)]
    pub avg_speed: Option<u16>,
    #[field(14)]
    pub max_speed: Option<u16>,
    #[field(15)]
    pub avg_heart_rate: Option<u8>,
    #[field(16)]
    pub max_heart_rate: Option<u8>,
    #[field(17)]
    pub avg_cadence: Option<u8>,
    #[field(18)]
    pub max_cadence: Option<u8>,
    #[field(19)]
    pub avg_power: Option<u16>,
    #[field(20)]
    pub max_power: Option<u16>,
    #[field(21)]
    pub total_ascent: Option<u16>,
    #[field(22)]
    pub total_descent: Option<u16>,
    #[field(24)]
    pub lap_trigger: Option<u8>,
    #[field(63)]
    pub min_heart_rate: Option<u8>,
    #[field(110)]
    pub enhanced_avg_speed: Option<u32>,
    #[field(111)]
    pub enhanced_max_speed: Option<u32>,
}

#[derive(Debug, Default, FromFields)]
pub struct RecordMesg {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub position_lat: Option<i32>,
    #[field(1)]
    pub position_long: Option<i32>,
    #[field(2)]
    pub altitude: Option<u16>,
    #[field(3)]
    pub heart_rate: Option<u8>,
    #[field(4)]
    pub cadence: Option<u8>,
    #[field(5)]
    pub distance: Option<u32>,
    #[field(6)]
    pub speed: Option<u16>,
    #[field(7)]
    pub power: Option<u16>,
    #[field(9)]
    pub grade: Option<i16>,
    #[field(10)]
    pub resistance: Option<u8>,
    #[field(11)]
    pub time_from_course: Option<i32>,
    #[field(12)]
    pub cycle_length: Option<u8>,
    #[field(13)]
    pub temperature: Option<i8>,
    #[field(18)]
    pub cycles: Option<u8>,
    #[field(19)]
    pub total_cycles: Option<u32>,
    #[field(28)]
    pub compressed_accumulated_power: Option<u16>,
    #[field(29)]
    pub accumulated_power: Option<u32>,
    #[field(30)]
    pub left_right_balance: Option<u8>,
    #[field(31)]
    pub gps_accuracy: Option<u8>,
    #[field(32)]
    pub vertical_speed: Option<i16>,
    #[field(33)]
    pub calories: Option<u16>,
    #[field(39)]
    pub vertical_oscillation: Option<u16>,
    #[field(40)]
    pub stance_time_percent: Option<u16>,
    #[field(41)]
    pub stance_time: Option<u16>,
    #[field(42)]
    pub activity_type: Option<u8>,
    #[field(43)]
    pub left_torque_effectiveness: Option<u8>,
    #[field(44)]
    pub right_torque_effectiveness: Option<u8>,
    #[field(45)]
    pub left_pedal_smoothness: Option<u8>,
    #[field(46)]
    pub right_pedal_smoothness: Option<u8>,
    #[field(47)]
    pub combined_pedal_smoothness: Option<u8>,
    #[field(48)]
    pub time128: Option<u8>,
    #[field(49)]
    pub stroke_type: Option<u8>,
    #[field(50)]
    pub zone: Option<u8>,
    #[field(51)]
    pub ball_speed: Option<u16>,
    #[field(52)]
    pub cadence256: Option<u16>,
    #[field(53)]
    pub fractional_cadence: Option<u8>,
    #[field(54)]
    pub total_hemoglobin_conc: Option<u16>,
    #[field(55)]
    pub total_hemoglobin_conc_min: Option<u16>,
    #[field(56)]
    pub total_hemoglobin_conc_max: Option<u16>,
    #[field(57)]
    pub saturated_hemoglobin_percent: Option<u16>,
    #[field(58)]
    pub saturated_hemoglobin_percent_min: Option<u16>,
    #[field(59)]
    pub saturated_hemoglobin_percent_max: Option<u16>,
    #[field(62)]
    pub device_index: Option<u8>,
    #[field(67)]
    pub left_pco: Option<i8>,
    #[field(68)]
    pub right_pco: Option<i8>,
    #[field(73)]
    pub enhanced_speed: Option<u32>,
    #[field(78)]
    pub enhanced_altitude: Option<u32>,
    #[field(81)]
    pub battery_soc: Option<u8>,
    #[field(82)]
    pub motor_power: Option<u16>,
    #[field(83)]
    pub vertical_ratio: Option<u16>,
    #[field(84)]
    pub stance_time_balance: Option<u16>,
    #[field(85)]
    pub step_length: Option<u16>,
    #[field(87)]
    pub cycle_length16: Option<u16>,
    #[field(91)]
    pub absolute_pressure: Option<u32>,
    #[field(92)]
    pub depth: Option<u32>,
    #[field(93)]
    pub next_stop_depth: Option<u32>,
    #[field(94)]
    pub next_stop_time: Option<u32>,
    #[field(95)]
    pub time_to_surface: Option<u32>,
    #[field(96)]
    pub ndl_time: Option<u32>,
    #[field(97)]
    pub cns_load: Option<u8>,
    #[field(98)]
    pub n2_load: Option<u16>,
    #[field(99)]
    pub respiration_rate: Option<u8>,
    #[field(108)]
    pub enhanced_respiration_rate: Option<u16>,
    #[field(114)]
    pub grit: Option<f32>,
    #[field(115)]
    pub flow: Option<f32>,
    #[field(116)]
    pub current_stress: Option<u16>,
    #[field(117)]
    pub ebike_travel_range: Option<u16>,
    #[field(118)]
    pub ebike_battery_level: Option<u8>,
    #[field(119)]
    pub ebike_assist_mode: Option<u8>,
    #[field(120)]
    pub ebike_assist_level_percent: Option<u8>,
    #[field(123)]
    pub air_time_remaining: Option<u32>,
    #[field(124)]
    pub pressure_sac: Option<u16>,
    #[field(125)]
    pub volume_sac: Option<u16>,
    #[field(126)]
    pub rmv: Option<u16>,
    #[field(127)]
    pub ascent_rate: Option<i32>,
    #[field(129)]
    pub po2: Option<u8>,
    #[field(139)]
    pub core_temperature: Option<u16>,
}

#[derive(Debug, Default, FromFields)]
pub struct DeviceInfoMesg {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub device_index: Option<u8>,
    #[field(1)]
    pub device_type: Option<u8>,
    #[field(2)]
    pub manufacturer: Option<u16>,
    #[field(3)]
    pub serial_number: Option<u32>,
    #[field(4)]
    pub product: Option<u16>,
    #[field(5)]
    pub software_version: Option<u16>,
    #[field(6)]
    pub hardware_version: Option<u8>,
    #[field(7)]
    pub cum_operating_time: Option<u32>,
    #[field(10)]
    pub battery_voltage: Option<u16>,
    #[field(11)]
    pub battery_status: Option<u8>,
    #[field(18)]
    pub sensor_position: Option<u8>,
    #[field(19)]
    pub descriptor: Option<String>,
    #[field(20)]
    pub ant_transmission_type: Option<u8>,
    #[field(21)]
    pub ant_device_number: Option<u16>,
    #[field(22)]
    pub ant_network: Option<u8>,
    #[field(25)]
    pub source_type: Option<u8>,
    #[field(27)]
    pub product_name: Option<String>,
}

#[derive(Debug, Default, FromFields)]
pub struct EventMesg {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub event: Option<u8>,
    #[field(1)]
    pub event_type: Option<u8>,
    #[field(2)]
    pub data16: Option<u16>,
    #[field(3)]
    pub data: Option<u32>,
    #[field(7)]
    pub score: Option<u16>,
    #[field(8)]
    pub opponent_score: Option<u16>,
    #[field(9)]
    pub front_gear_num: Option<u8>,
    #[field(10)]
    pub front_gear: Option<u8>,
    #[field(11)]
    pub rear_gear_num: Option<u8>,
    #[field(12)]
    pub rear_gear: Option<u8>,
    #[field(13)]
    pub device_index: Option<u8>,
    #[field(14)]
    pub activity_type: Option<u8>,
    #[field(15)]
    pub start_timestamp: Option<u32>,
}

#[derive(Debug, Default, FromFields)]
pub struct UserProfileMesg {
    #[field(0)]
    pub friendly_name: Option<String>,
    #[field(1)]
    pub gender: Option<u8>,
    #[field(2)]
    pub age: Option<u8>,
    #[field(3)]
    pub height: Option<u8>,
    #[field(4)]
    pub weight: Option<u16>,
    #[field(5)]
    pub language: Option<u8>,
    #[field(7)]
    pub weight_setting: Option<u8>,
    #[field(8)]
    pub resting_heart_rate: Option<u8>,
    #[field(9)]
    pub default_max_running_heart_rate: Option<u8>,
    #[field(10)]
    pub default_max_biking_heart_rate: Option<u8>,
    #[field(11)]
    pub default_max_heart_rate: Option<u8>,
    #[field(12)]
    pub hr_setting: Option<u8>,
    #[field(13)]
    pub speed_setting: Option<u8>,
    #[field(14)]
    pub dist_setting: Option<u8>,
    #[field(16)]
    pub power_setting: Option<u8>,
    #[field(17)]
    pub activity_class: Option<u8>,
    #[field(18)]
    pub position_setting: Option<u8>,
    #[field(21)]
    pub temperature_setting: Option<u8>,
    #[field(22)]
    pub local_id: Option<u16>,
    /// Six bytes, least significant first.
    #[field(23, |id, v: &Value| *id = global_id(v))]
    pub global_id: Option<u64>,
    #[field(28)]
    pub wake_time: Option<u32>,
    #[field(29)]
    pub sleep_time: Option<u32>,
    #[field(30)]
    pub height_setting: Option<u8>,
}

fn global_id(value: &Value) -> Option<u64> {
    match value {
        Value::Bytes(r) => Some(r.iter().rev().fold(0, |acc, b| acc << 8 | *b as u64)),
        value => value.as_i128().and_then(|x| u64::try_from(x).ok()),
    }
}
