//! Names of enumerated profile values.
//!
//! Each table maps a raw code to a display name, sorted by code. Codes without
//! an entry render as `Unknown (<code>)`.

/// A static code to name lookup.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    entries: &'static [(u16, &'static str)],
}

impl Table {
    const fn new(entries: &'static [(u16, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, code: u16) -> Option<&'static str> {
        let i = self.entries.binary_search_by_key(&code, |(c, _)| *c).ok()?;
        Some(self.entries[i].1)
    }

    /// The name of a code, or `Unknown (<code>)`.
    pub fn name(&self, code: u16) -> String {
        match self.get(code) {
            Some(name) => name.to_string(),
            None => format!("Unknown ({code})"),
        }
    }

    /// The name of a code if present, or an empty string.
    pub fn name_or_empty(&self, code: Option<u16>) -> String {
        code.map(|c| self.name(c)).unwrap_or_default()
    }
}

pub static SPORT: Table = Table::new(&[
    (0, "Generic"),
    (1, "Running"),
    (2, "Cycling"),
    (3, "Transition"),
    (4, "Fitness Equipment"),
    (5, "Swimming"),
    (6, "Basketball"),
    (7, "Soccer"),
    (8, "Tennis"),
    (9, "American Football"),
    (10, "Training"),
    (11, "Walking"),
    (12, "Cross Country Skiing"),
    (13, "Alpine Skiing"),
    (14, "Snowboarding"),
    (15, "Rowing"),
    (16, "Mountaineering"),
    (17, "Hiking"),
    (18, "Multisport"),
    (19, "Paddling"),
    (20, "Flying"),
    (21, "E-Biking"),
    (22, "Motorcycling"),
    (23, "Boating"),
    (24, "Driving"),
    (25, "Golf"),
    (26, "Hang Gliding"),
    (27, "Horseback Riding"),
    (28, "Hunting"),
    (29, "Fishing"),
    (30, "Inline Skating"),
    (31, "Rock Climbing"),
    (32, "Sailing"),
    (33, "Ice Skating"),
    (34, "Sky Diving"),
    (35, "Snowshoeing"),
    (36, "Snowmobiling"),
    (37, "Stand Up Paddleboarding"),
    (38, "Surfing"),
    (39, "Wakeboarding"),
    (40, "Water Skiing"),
    (41, "Kayaking"),
    (42, "Rafting"),
    (43, "Windsurfing"),
    (44, "Kitesurfing"),
    (45, "Tactical"),
    (46, "Jumpmaster"),
    (47, "Boxing"),
    (48, "Floor Climbing"),
    (53, "Diving"),
    (62, "Hiit"),
    (67, "Yoga"),
    (71, "Disc Golf"),
    (254, "All"),
]);

pub static SUB_SPORT: Table = Table::new(&[
    (0, "Generic"),
    (1, "Treadmill"),
    (2, "Street"),
    (3, "Trail"),
    (4, "Track"),
    (5, "Spin"),
    (6, "Indoor Cycling"),
    (7, "Road"),
    (8, "Mountain"),
    (9, "Downhill"),
    (10, "Recumbent"),
    (11, "Cyclocross"),
    (12, "Hand Cycling"),
    (13, "Track Cycling"),
    (14, "Indoor Rowing"),
    (15, "Elliptical"),
    (16, "Stair Climbing"),
    (17, "Lap Swimming"),
    (18, "Open Water"),
    (19, "Flexibility Training"),
    (20, "Strength Training"),
    (21, "Warm Up"),
    (22, "Match"),
    (23, "Exercise"),
    (24, "Challenge"),
    (25, "Indoor Skiing"),
    (26, "Cardio Training"),
    (27, "Indoor Walking"),
    (28, "E-Bike Fitness"),
    (29, "BMX"),
    (30, "Casual Walking"),
    (31, "Speed Walking"),
    (32, "Bike To Run Transition"),
    (33, "Run To Bike Transition"),
    (34, "Swim To Bike Transition"),
    (35, "ATV"),
    (36, "Motocross"),
    (37, "Backcountry"),
    (38, "Resort"),
    (39, "RC Drone"),
    (40, "Wingsuit"),
    (41, "Whitewater"),
    (42, "Skate Skiing"),
    (43, "Yoga"),
    (44, "Pilates"),
    (45, "Indoor Running"),
    (46, "Gravel Cycling"),
    (47, "E-Bike Mountain"),
    (48, "Commuting"),
    (49, "Mixed Surface"),
    (50, "Navigate"),
    (51, "Track Me"),
    (52, "Map"),
    (53, "Single Gas Diving"),
    (54, "Multi Gas Diving"),
    (55, "Gauge Diving"),
    (56, "Apnea Diving"),
    (57, "Apnea Hunting"),
    (58, "Virtual Activity"),
    (59, "Obstacle"),
    (62, "Breathing"),
    (65, "Sail Race"),
    (67, "Ultra"),
    (68, "Indoor Climbing"),
    (69, "Bouldering"),
    (254, "All"),
]);

pub static MANUFACTURER: Table = Table::new(&[
    (1, "Garmin"),
    (2, "Garmin FR405 Antfs"),
    (3, "Zephyr"),
    (4, "Dayton"),
    (5, "IDT"),
    (6, "SRM"),
    (7, "Quarq"),
    (8, "Ibike"),
    (9, "Saris"),
    (10, "Spark HK"),
    (11, "Tanita"),
    (12, "Echowell"),
    (13, "Dynastream OEM"),
    (14, "Nautilus"),
    (15, "Dynastream"),
    (16, "Timex"),
    (17, "Metrigear"),
    (18, "Xelic"),
    (19, "Beurer"),
    (20, "Cardiosport"),
    (21, "A and D"),
    (22, "HMM"),
    (23, "Suunto"),
    (24, "Thita Elektronik"),
    (25, "GPulse"),
    (26, "Clean Mobile"),
    (27, "Pedal Brain"),
    (28, "Peaksware"),
    (29, "Saxonar"),
    (30, "Lemond Fitness"),
    (31, "Dexcom"),
    (32, "Wahoo Fitness"),
    (33, "Octane Fitness"),
    (34, "Archinoetics"),
    (35, "The Hurt Box"),
    (36, "Citizen Systems"),
    (37, "Magellan"),
    (38, "Osynce"),
    (39, "Holux"),
    (40, "Concept2"),
    (41, "Shimano"),
    (42, "One Giant Leap"),
    (43, "Ace Sensor"),
    (44, "Brim Brothers"),
    (45, "Xplova"),
    (46, "Perception Digital"),
    (47, "Bf1systems"),
    (48, "Pioneer"),
    (49, "Spantec"),
    (50, "Metalogics"),
    (51, "4iiiis"),
    (52, "Seiko Epson"),
    (53, "Seiko Epson OEM"),
    (54, "Ifor Powell"),
    (55, "Maxwell Guider"),
    (56, "Star Trac"),
    (57, "Breakaway"),
    (58, "Alatech Technology Ltd"),
    (59, "Mio Technology Europe"),
    (60, "Rotor"),
    (61, "Geonaute"),
    (62, "ID Bike"),
    (63, "Specialized"),
    (64, "WTEK"),
    (65, "Physical Enterprises"),
    (66, "North Pole Engineering"),
    (67, "BKOOL"),
    (68, "Cateye"),
    (69, "Stages Cycling"),
    (70, "Sigmasport"),
    (71, "TomTom"),
    (72, "Peripedal"),
    (73, "Wattbike"),
    (76, "Moxy"),
    (77, "Ciclosport"),
    (78, "Powerbahn"),
    (79, "Acorn Projects Aps"),
    (80, "Lifebeam"),
    (81, "Bontrager"),
    (82, "Wellgo"),
    (83, "Scosche"),
    (84, "Magura"),
    (85, "Woodway"),
    (86, "Elite"),
    (87, "Nielsen Kellerman"),
    (88, "DK City"),
    (89, "Tacx"),
    (90, "Direction Technology"),
    (91, "Magtonic"),
    (92, "1partcarbon"),
    (93, "Inside Ride Technologies"),
    (94, "Sound of Motion"),
    (95, "Stryd"),
    (96, "ICG"),
    (97, "MiPulse"),
    (98, "BSX Athletics"),
    (99, "Look"),
    (100, "Campagnolo SRL"),
    (101, "Body Bike Smart"),
    (102, "Praxisworks"),
    (103, "Limits Technology"),
    (104, "TopAction Technology"),
    (105, "Cosinuss"),
    (106, "Fitcare"),
    (107, "Magene"),
    (108, "Giant Manufacturing Co"),
    (109, "Tigrasport"),
    (110, "Salutron"),
    (111, "Technogym"),
    (112, "Bryton Sensors"),
    (113, "Latitude Limited"),
    (114, "Soaring Technology"),
    (115, "Igpsport"),
    (116, "Thinkrider"),
    (117, "Gopher Sport"),
    (118, "Waterrower"),
    (119, "Orangetheory"),
    (120, "Inpeak"),
    (121, "Kinetic"),
    (122, "Johnson Health Tech"),
    (123, "Polar Electro"),
    (124, "Seesense"),
    (125, "NCI Technology"),
    (126, "IQsquare"),
    (127, "Leomo"),
    (128, "Ifit Com"),
    (129, "Coros Byte"),
    (130, "Versa Design"),
    (131, "Chileaf"),
    (132, "Cycplus"),
    (133, "Gravaa Byte"),
    (134, "Sigeyi"),
    (135, "Coospo"),
    (136, "Geoid"),
    (137, "Bosch"),
    (138, "Kyto"),
    (139, "Kinetic Sports"),
    (140, "Decathlon Byte"),
    (141, "TQ Systems"),
    (142, "Tag Heuer"),
    (143, "Keiser Fitness"),
    (144, "Zwift Byte"),
    (145, "Porsche EP"),
    (146, "Blackbird"),
    (147, "Meilan Byte"),
    (148, "Ezon"),
    (149, "Laisi"),
    (150, "Myzone"),
    (151, "Abawo"),
    (152, "Bafang"),
    (153, "Luhong Technology"),
    (255, "Development"),
    (257, "Healthandlife"),
    (258, "Lezyne"),
    (259, "Scribe Labs"),
    (260, "Zwift"),
    (261, "Watteam"),
    (262, "Recon"),
    (263, "Favero Electronics"),
    (264, "Dynovelo"),
    (265, "Strava"),
    (266, "Precor"),
    (267, "Bryton"),
    (268, "Sram"),
    (269, "Navman"),
    (270, "Cobi"),
    (271, "Spivi"),
    (272, "Mio Magellan"),
    (273, "Evesports"),
    (274, "Sensitivus Gauge"),
    (275, "Podoon"),
    (276, "Life Time Fitness"),
    (277, "Falco E Motors"),
    (278, "Minoura"),
    (279, "Cycliq"),
    (280, "Luxottica"),
    (281, "Trainer Road"),
    (282, "The Sufferfest"),
    (283, "Fullspeedahead"),
    (284, "Virtualtraining"),
    (285, "Feedbacksports"),
    (286, "Omata"),
    (287, "VDO"),
    (288, "Magneticdays"),
    (289, "Hammerhead"),
    (290, "Kinetic by Kurt"),
    (291, "Shapelog"),
    (292, "Dabuziduo"),
    (293, "Jetblack"),
    (294, "Coros"),
    (295, "Virtugo"),
    (296, "Velosense"),
    (297, "Cycligentinc"),
    (298, "Trailforks"),
    (299, "Mahle Ebikemotion"),
    (300, "Nurvv"),
    (301, "Microprogram"),
    (302, "Zone5cloud"),
    (303, "Greenteg"),
    (304, "Yamaha Motors"),
    (305, "Whoop"),
    (306, "Gravaa"),
    (307, "Onelap"),
    (308, "Monark Exercise"),
    (309, "Form"),
    (310, "Decathlon"),
    (311, "Syncros"),
    (312, "Heatup"),
    (313, "Cannondale"),
    (314, "True Fitness"),
    (315, "RGT Cycling"),
    (316, "Vasa"),
    (317, "Race Republic"),
    (318, "Fazua"),
    (319, "Oreka Training"),
    (320, "Lsec"),
    (321, "Lululemon Studio"),
    (322, "Shanyue"),
    (323, "Spinning MDA"),
    (324, "Hilldating"),
    (325, "Aero Sensor"),
    (326, "Nike"),
    (327, "Magicshine"),
    (328, "Ictrainer"),
    (329, "Absolute Cycling"),
    (330, "Eo Swimbetter"),
    (331, "Mywhoosh"),
    (332, "Ravemen"),
    (333, "Tektro Racing Products"),
    (334, "Darad Innovation Corporation"),
    (335, "Cycloptim"),
    (5759, "Actigraphcorp"),
]);

pub static ACTIVITY_TYPE: Table = Table::new(&[
    (0, "Generic"),
    (1, "Running"),
    (2, "Cycling"),
    (3, "Transition"),
    (4, "Fitness Equipment"),
    (5, "Swimming"),
    (6, "Walking"),
    (8, "Sedentary"),
    (254, "All"),
]);

pub static STROKE_TYPE: Table = Table::new(&[
    (0, "No Event"),
    (1, "Other"),
    (2, "Serve"),
    (3, "Forehand"),
    (4, "Backhand"),
    (5, "Smash"),
]);

pub static FILE_TYPE: Table = Table::new(&[
    (1, "Device"),
    (2, "Settings"),
    (3, "Sport"),
    (4, "Activity"),
    (5, "Workout"),
    (6, "Course"),
    (7, "Schedules"),
    (9, "Weight"),
    (10, "Totals"),
    (11, "Goals"),
    (14, "Blood Pressure"),
    (15, "Monitoring A"),
    (20, "Activity Summary"),
    (28, "Monitoring Daily"),
    (32, "Monitoring B"),
    (34, "Segment"),
    (35, "Segment List"),
    (40, "Exd Configuration"),
]);

pub static EVENT: Table = Table::new(&[
    (0, "Timer"),
    (3, "Workout"),
    (4, "Workout Step"),
    (5, "Power Down"),
    (6, "Power Up"),
    (7, "Off Course"),
    (8, "Session"),
    (9, "Lap"),
    (10, "Course Point"),
    (11, "Battery"),
    (12, "Virtual Partner Pace"),
    (13, "HR High Alert"),
    (14, "HR Low Alert"),
    (15, "Speed High Alert"),
    (16, "Speed Low Alert"),
    (17, "Cadence High Alert"),
    (18, "Cadence Low Alert"),
    (19, "Power High Alert"),
    (20, "Power Low Alert"),
    (21, "Recovery HR"),
    (22, "Battery Low"),
    (23, "Time Duration Alert"),
    (24, "Distance Duration Alert"),
    (25, "Calorie Duration Alert"),
    (26, "Activity"),
    (27, "Fitness Equipment"),
    (28, "Length"),
    (32, "User Marker"),
    (33, "Sport Point"),
    (36, "Calibration"),
    (42, "Front Gear Change"),
    (43, "Rear Gear Change"),
    (44, "Rider Position Change"),
    (45, "Elevation High Alert"),
    (46, "Elevation Low Alert"),
    (47, "Comm Timeout"),
    (54, "Auto Activity Detect"),
    (56, "Dive Alert"),
    (57, "Dive Gas Switched"),
    (71, "Tank Pressure Reserve"),
    (72, "Tank Pressure Critical"),
    (73, "Tank Lost"),
    (75, "Radar Threat Alert"),
    (76, "Tank Battery Low"),
    (81, "Tank Pod Connected"),
    (82, "Tank Pod Disconnected"),
]);

pub static EVENT_TYPE: Table = Table::new(&[
    (0, "Start"),
    (1, "Stop"),
    (2, "Consecutive"),
    (3, "Marker"),
    (4, "Stop All"),
    (5, "Begin"),
    (6, "End"),
    (7, "End All"),
    (8, "Stop Disable"),
    (9, "Stop Disable All"),
]);

pub static LAP_TRIGGER: Table = Table::new(&[
    (0, "Manual"),
    (1, "Time"),
    (2, "Distance"),
    (3, "Position Start"),
    (4, "Position Lap"),
    (5, "Position Waypoint"),
    (6, "Position Marked"),
    (7, "Session End"),
    (8, "Fitness Equipment"),
]);

pub static SESSION_TRIGGER: Table = Table::new(&[
    (0, "Activity End"),
    (1, "Manual"),
    (2, "Auto Multi Sport"),
    (3, "Fitness Equipment"),
]);

pub static GENDER: Table = Table::new(&[(0, "Female"), (1, "Male")]);

pub static LANGUAGE: Table = Table::new(&[
    (0, "English"),
    (1, "French"),
    (2, "Italian"),
    (3, "German"),
    (4, "Spanish"),
    (5, "Croatian"),
    (6, "Czech"),
    (7, "Danish"),
    (8, "Dutch"),
    (9, "Finnish"),
    (10, "Greek"),
    (11, "Hungarian"),
    (12, "Norwegian"),
    (13, "Polish"),
    (14, "Portuguese"),
    (15, "Slovakian"),
    (16, "Slovenian"),
    (17, "Swedish"),
    (18, "Russian"),
    (19, "Turkish"),
    (20, "Latvian"),
    (21, "Ukrainian"),
    (22, "Arabic"),
    (23, "Farsi"),
    (24, "Bulgarian"),
    (25, "Romanian"),
    (26, "Chinese"),
    (27, "Japanese"),
    (28, "Korean"),
    (29, "Taiwanese"),
    (30, "Thai"),
    (31, "Hebrew"),
    (32, "Brazilian Portuguese"),
    (33, "Indonesian"),
    (34, "Malaysian"),
    (35, "Vietnamese"),
    (36, "Burmese"),
    (37, "Mongolian"),
    (254, "Custom"),
]);

pub static DISPLAY_MEASURE: Table =
    Table::new(&[(0, "Metric"), (1, "Statute"), (2, "Nautical")]);

pub static DISPLAY_HEART: Table = Table::new(&[(0, "BPM"), (1, "Max"), (2, "Reserve")]);

pub static DISPLAY_POWER: Table = Table::new(&[(0, "Watts"), (1, "Percent FTP")]);

pub static DISPLAY_POSITION: Table = Table::new(&[
    (0, "Degree"),
    (1, "Degree Minute"),
    (2, "Degree Minute Second"),
    (3, "Austrian Grid"),
    (4, "British Grid"),
    (5, "Dutch Grid"),
    (6, "Hungarian Grid"),
    (7, "Finnish Grid"),
    (8, "German Grid"),
    (9, "Icelandic Grid"),
    (10, "Indonesian Equatorial"),
    (11, "Indonesian Irian"),
    (12, "Indonesian Southern"),
]);

pub static BATTERY_STATUS: Table = Table::new(&[
    (1, "New"),
    (2, "Good"),
    (3, "Ok"),
    (4, "Low"),
    (5, "Critical"),
    (6, "Charging"),
    (7, "Unknown"),
]);

pub static SOURCE_TYPE: Table = Table::new(&[
    (0, "ANT"),
    (1, "ANT+"),
    (2, "Bluetooth"),
    (3, "Bluetooth Low Energy"),
    (4, "WiFi"),
    (5, "Local"),
]);

pub static ANT_NETWORK: Table = Table::new(&[
    (0, "Public"),
    (1, "ANT+"),
    (2, "ANT-FS"),
    (3, "Private"),
]);

pub static BODY_LOCATION: Table = Table::new(&[
    (0, "Left Leg"),
    (1, "Left Calf"),
    (2, "Left Shin"),
    (3, "Left Hamstring"),
    (4, "Left Quad"),
    (5, "Left Glute"),
    (6, "Right Leg"),
    (7, "Right Calf"),
    (8, "Right Shin"),
    (9, "Right Hamstring"),
    (10, "Right Quad"),
    (11, "Right Glute"),
    (12, "Torso Back"),
    (13, "Left Lower Back"),
    (14, "Left Upper Back"),
    (15, "Right Lower Back"),
    (16, "Right Upper Back"),
    (17, "Torso Front"),
    (18, "Left Abdomen"),
    (19, "Left Chest"),
    (20, "Right Abdomen"),
    (21, "Right Chest"),
    (22, "Left Arm"),
    (23, "Left Shoulder"),
    (24, "Left Bicep"),
    (25, "Left Tricep"),
    (26, "Left Brachioradialis"),
    (27, "Left Forearm Extensors"),
    (28, "Right Arm"),
    (29, "Right Shoulder"),
    (30, "Right Bicep"),
    (31, "Right Tricep"),
    (32, "Right Brachioradialis"),
    (33, "Right Forearm Extensors"),
    (34, "Neck"),
    (35, "Throat"),
    (36, "Waist Mid Back"),
    (37, "Waist Front"),
    (38, "Waist Left"),
    (39, "Waist Right"),
]);

/// Device types of sensors reached over ANT+ (and most other sources).
pub static ANTPLUS_DEVICE_TYPE: Table = Table::new(&[
    (1, "ANT-FS"),
    (11, "Bike Power"),
    (12, "Environment Sensor Legacy"),
    (15, "Multi Sport Speed Distance"),
    (16, "Control"),
    (17, "Fitness Equipment"),
    (18, "Blood Pressure"),
    (19, "Geocache Node"),
    (20, "Light Electric Vehicle"),
    (25, "Environment Sensor"),
    (26, "Racquet"),
    (27, "Control Hub"),
    (31, "Muscle Oxygen"),
    (34, "Shifting"),
    (35, "Bike Light Main"),
    (36, "Bike Light Shared"),
    (38, "Exd"),
    (40, "Bike Radar"),
    (46, "Bike Aero"),
    (119, "Weight Scale"),
    (120, "Heart Rate"),
    (121, "Bike Speed Cadence"),
    (122, "Bike Cadence"),
    (123, "Bike Speed"),
    (124, "Stride Speed Distance"),
]);

/// Device types of sensors built into the recording device.
pub static LOCAL_DEVICE_TYPE: Table = Table::new(&[
    (0, "GPS"),
    (1, "GLONASS"),
    (2, "GPS GLONASS"),
    (3, "Accelerometer"),
    (4, "Barometer"),
    (5, "Temperature"),
    (10, "Wrist Heart Rate"),
    (12, "Sensor Hub"),
]);
