//! Static field catalog for intimation case files.
//!
//! Descriptor order inside a section is display order.

use super::{FieldDescriptor, FieldKind, Section, field};

/// Field ids the engine refers to directly.
pub mod ids {
    pub const FILE_ID: &str = "FILE_ID";
    pub const INTIMATION_NO: &str = "INTIMATION_NO";
    pub const MID: &str = "MID";
    pub const DEATH_PERSON_NAME: &str = "DEATH_PERSON_NAME";
    pub const TYPE_OF_ACCIDENT: &str = "TYPE_OF_ACCIDENT";
    pub const DISTRICT: &str = "DISTRICT";
    pub const AGENT_NAME: &str = "AGENT_NAME";
    pub const FILE_STATUS: &str = "FILE_STATUS";
    pub const CONTACT_DETAILS: &str = "CONTACT_DETAILS";
    pub const RESUBMISSION_INFORMATION: &str = "RESUBMISSION_INFORMATION";
    pub const LTR_LINK1: &str = "LTR_LINK1";
    pub const LTR_LINK2: &str = "LTR_LINK2";

    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
}

/// `FILE_STATUS` values the dashboard tracks by name.
pub mod statuses {
    pub const WAITING_FOR_DOCUMENTS: &str = "Waiting For Documents";
    pub const SUBMITTED_IN_PARTY: &str = "Documents Submitted In Party";
    pub const FORWARDED_TO_INSURANCE: &str = "Forwarded to Insurance";
    pub const COMPENSATED: &str = "Approved - Compensated";
}

/// Status given to every new draft.
pub const DEFAULT_FILE_STATUS: &str = statuses::WAITING_FOR_DOCUMENTS;

pub const DOCUMENT_OPTIONS: &[&str] = &[
    "FIR", "Complaint Letter", "Inquest Report", "Post Morterm", "Death Certificate",
    "Family Certificate", "Aadhar", "Voter", "Ration", "Pan", "Bank Account",
    "NewsPaper Cutting/Photos", "Incident Photos", "Driving License", "Final Report",
    "Charge Sheet", "RFSL Report", "Discharge/Death Summary", "Case Dairy/ Case Sheet",
    "AE Letter", "Metrological Report", "Translated All Documents", "Joint Bank Account",
    "Notorary Affidavit", "RFSL Opinion Report", "Proceeding Copy", "Motor Vehicle Report",
    "Alteration MEMO", "Train Ticket Copy",
];

pub const AGENT_NAME_OPTIONS: &[&str] = &[
    "Chandu", "Srilakshmi", "Gopi", "Durga Rao", "Nandini", "Ramya", "Lavanya",
];

pub const TYPE_OF_ACCIDENT_OPTIONS: &[&str] = &[
    "Road Accidents", "Animals/Insects Bite", "Drowning", "Slips & Fall From Heights",
    "Electric Shock", "Thunder Strike", "Industrial Accidents", "Mining Accidents",
    "Fire Accidents", "Stampede", "Natural Calamities", "Animal Attack", "Train Accidents",
];

pub const NOMINEE_RELATION_OPTIONS: &[&str] = &[
    "Father", "Mother", "Brother", "Sister", "Son", "Daughter", "Husband", "Wife",
    "Grandfather", "Grandmother", "Grandson", "Granddaughter", "Great-grandfather",
    "Great-grandmother", "Great-grandson", "Great-granddaughter", "Uncle", "Aunt", "Cousin",
    "Nephew", "Niece", "Father-in-law", "Mother-in-law", "Brother-in-law", "Sister-in-law",
    "Son-in-law", "Daughter-in-law", "Cousin-in-law",
];

pub const DISTRICT_OPTIONS: &[&str] = &[
    "Adilabad", "Alluri Sitarama Raju", "Anakapalli", "Anantapur", "Andaman", "Annamayya",
    "Bapatla", "Bhadradri Kothagudem", "Chittoor", "Dr. B.R. Ambedkar Konaseema",
    "East Godavari", "Eluru", "Guntur", "Hanmakonda", "Hyderabad", "Jagtial", "Jangaon",
    "Jayashankar Bhoopalpally", "Jogulamba Gadwal", "Kadapa", "Kakinada", "Kamareddy",
    "Karimnagar", "Khammam", "Komaram Bheem Asifabad", "Krishna", "Kurnool", "Mahabubabad",
    "Mahbubnagar", "Mancherial", "Manyam", "Medak", "Medchal Malkajgiri", "Mulugu",
    "Nagarkurnool", "Nalgonda", "Nandyal", "Narayanapet", "Nellore", "Nicobar", "Nirmal",
    "Nizamabad", "North & Middle Andaman", "NTR", "Palanadu", "Peddapalli", "Prakasam",
    "Rajanna Sircilla", "Rangareddy", "Sangareddy", "Siddipet", "Sri Satya Sai", "Srikakulam",
    "Suryapet", "Tirupati", "Vikarabad", "Visakhapatnam", "Vizianagaram", "Wanaparthy",
    "Warangal", "West Godavari", "Yadadri Bhuvanagiri",
];

pub const AC_NAME_OPTIONS: &[&str] = &[
    "Achampet", "Achanta", "Addanki", "Adilabad", "Adoni", "Alair", "Alampur", "Allagadda",
    "Alur", "Amadalavalasa", "Amalapuram", "Amberpet", "Anakapalli", "Anantapur Urban",
    "Anaparthy", "Andaman And Nicobar", "Andole", "Araku Valley", "Armoor", "Asifabad",
    "Aswaraopet", "Atmakur", "Avanigadda", "Badvel", "Bahadurpura", "Balkonda",
    "Banaganapalle", "Banswada", "Bapatla", "Bellampalli", "Bhadrachalam", "Bhimavaram",
    "Bhimili", "Bhongir", "Bhupalpalle", "Boath", "Bobbili", "Bodhan", "Chandragiri",
    "Chandrayangutta", "Charminar", "Cheepurupalli", "Chennur", "Chevella", "Chilakaluripet",
    "Chintalapudi", "Chirala", "Chittoor", "Chodavaram", "Choppadandi", "Darsi", "Dendulur",
    "Devarkadra", "Deverkonda", "Dharmapuri", "Dharmavaram", "Dhone", "Dornakal", "Dubbak",
    "Elamanchili", "Eluru", "Etcherla", "Gadwal", "Gajapathinagaram", "Gajuwaka", "Gajwel",
    "Gangadhara Nellore", "Gannavaram (Eg)", "Gannavaram (Krishna)", "Ghanpur", "Giddalur",
    "Gopalpuram", "Goshamahal", "Gudivada", "Gudur", "Guntakal", "Guntur East", "Guntur West",
    "Gurzala", "Hindupur", "Husnabad", "Huzurabad", "Huzurnagar", "Ibrahimpatnam", "Ichapuram",
    "Jadcherla", "Jaggampeta", "Jaggayyapet", "Jagtial", "Jammalamadugu", "Jangaon",
    "Jubilee Hills", "Jukkal", "Kadapa", "Kadiri", "Kaikalur", "Kakinada City",
    "Kakinada Rural", "Kalwakurthi", "Kalyandurg", "Kamalapuram", "Kamareddy", "Kandukur",
    "Kanigiri", "Karimnagar", "Karwan", "Kavali", "Khairatabad", "Khammam", "Khanapur",
    "Kodad", "Kodangal", "Kodumur", "Kodur", "Kollapur", "Kondepi", "Koratla", "Kothagudem",
    "Kothapeta", "Kovur", "Kovvur", "Kukatpally", "Kuppam", "Kurnool", "Kurupam",
    "Lal Bahadur Nagar", "Macherla", "Machilipatnam", "Madakasira", "Madanpalle", "Madhira",
    "Madugula", "Mahbubabad", "Mahbubnagar", "Maheswaram", "Makthal", "Malakpet", "Malkajgiri",
    "Manakondur", "Mancherial", "Mandapeta", "Mangalagiri", "Manthani", "Mantralayam",
    "Markapur", "Medak", "Medchal", "Miryalguda", "Mudhole", "Mulug", "Mummidivaram",
    "Mungode", "Musheerabad", "Mydukur", "Mylavaram", "Nagari", "Nagarjuna Sagar",
    "Nagarkurnool", "Nakrekal", "Nalgonda", "Nampally", "Nandigama", "Nandikotkur", "Nandyal",
    "Narasannapeta", "Narasapur", "Narasaraopet", "Narayankhed", "Narayanpet", "Narsampet",
    "Narsapur", "Narsipatnam", "Nellimarla", "Nellore City", "Nellore Rural", "Nidadavole",
    "Nirmal", "Nizamabad Rural", "Nizamabad Urban", "Nuzvid", "Ongole", "Paderu", "Palacole",
    "Palair", "Palakonda", "Palakurthi", "Palamaner", "Palasa", "Pamarru", "Panyam", "Parchur",
    "Pargi", "Parkal", "Parvathipuram", "Patancheru", "Pathapatnam", "Pattikonda",
    "Payakaraopeta", "Pedana", "Peddakurapadu", "Peddapalli", "Peddapuram", "Penamaluru",
    "Pendurthi", "Penukonda", "Pileru", "Pinapaka", "Pithapuram", "Polavaram", "Ponnur",
    "Prathipad", "Prathipadu", "Proddatur", "Pulivendla", "Punganur", "Puthalapattu",
    "Puttaparthi", "Quthbullapur", "Rajahmundry City", "Rajahmundry Rural", "Rajam",
    "Rajampet", "Rajanagaram", "Rajendranagar", "Ramachandrapuram", "Ramagundam",
    "Rampachodavaram", "Raptadu", "Rayachoty", "Rayadurg", "Razole", "Repalle", "Salur",
    "Sanathnagar", "Sangareddy", "Santhanuthalapadu", "Sarvepalli", "Sathupalli",
    "Sattenapalli", "Satyavedu", "Secunderabad", "Secunderabad Cantonment", "Serlingampally",
    "Shadnagar", "Siddipet", "Singanamala", "Sircilla", "Sirpur", "Srikakulam", "Srikalahasti",
    "Srisailam", "Srungavarapukota", "Sullurpet", "Suryapet", "Tadepalligudem", "Tadikonda",
    "Tadpatri", "Tandur", "Tanuku", "Tekkali", "Tenali", "Thamballapalle", "Tirupati",
    "Tiruvuru", "Tungaturthi", "Tuni", "Udayagiri", "Undi", "Unguturu", "Uppal", "Uravakonda",
    "Vemulawada", "Vemuru", "Venkatagiri", "Vijayawada Central", "Vijayawada East",
    "Vijayawada West", "Vikarabad", "Vinukonda", "Visakhapatnam East", "Visakhapatnam North",
    "Visakhapatnam South", "Visakhapatnam West", "Vizianagaram", "Wanaparthy", "Warangal East",
    "Warangal West", "Wardhannapet", "Wyra", "Yakutpura", "Yellandu", "Yellareddy",
    "Yemmiganur", "Yerragondapalem", "Zahirabad",
];

pub const FILE_STATUS_OPTIONS: &[&str] = &[
    "Waiting For Documents", "Documents Submitted In Party", "Forwarded to Insurance",
    "Closed at Insurance", "Closed at Party", "Approved - Compensated", "Closed Letters",
    "Account Rejected",
];

pub const RESUBMISSION_TYPE_OPTIONS: &[&str] = &[
    "Insurance", "Party",
];

pub const RESUBMISSION_STATUS_OPTIONS: &[&str] = &[
    "Submitted", "Pending",
];

pub const LTR_STATUS_OPTIONS: &[&str] = &[
    "Mla/Aci", "Mp", "Ppp", "Mpp", "Cluster", "Unit", "Chairmens", "Others",
];

pub(super) static FIELDS: &[FieldDescriptor] = &[
    field("FILE_ID", "FILE ID", FieldKind::ShortText, Section::FileInformation)
        .describe("Automated and hidden")
        .hidden(),
    field("INTIMATION_NO", "INTIMATION NO", FieldKind::Numeric, Section::FileInformation),
    field("AGENT_NAME", "AGENT NAME", FieldKind::Select, Section::FileInformation)
        .with_options(AGENT_NAME_OPTIONS),
    field("REFERENCE", "REFERENCE", FieldKind::ShortText, Section::FileInformation),
    field("MID", "MID", FieldKind::Numeric, Section::FileInformation)
        .describe("8 Digit Number"),
    field("DEATH_PERSON_NAME", "DEATH PERSON NAME", FieldKind::ShortText, Section::FileInformation),
    field("INTIMATION_BY", "INTIMATION BY", FieldKind::ShortText, Section::FileInformation),
    field(
        "INTIMATION_PERSON_PHONE_NUMBER",
        "INTIMATION PERSON PHONE NUMBER",
        FieldKind::Numeric,
        Section::FileInformation,
    )
        .describe("Phone Number 10 digits"),
    field("TYPE_OF_ACCIDENT", "TYPE OF ACCIDENT", FieldKind::Select, Section::FileInformation)
        .with_options(TYPE_OF_ACCIDENT_OPTIONS),
    field("ACCIDENT_REMARKS", "ACCIDENT REMARKS", FieldKind::LongText, Section::FileInformation),
    field("NOMINEE_NAME", "NOMINEE NAME", FieldKind::ShortText, Section::FileInformation),
    field("NOMINEE_RELATION", "NOMINEE RELATION", FieldKind::Select, Section::FileInformation)
        .with_options(NOMINEE_RELATION_OPTIONS),
    field("NOMINEE_MOBILE", "NOMINEE MOBILE", FieldKind::Numeric, Section::FileInformation)
        .describe("Phone Number 10 digits"),
    field("CONTACT_DETAILS", "CONTACT-DETAILS", FieldKind::ContactList, Section::FileInformation)
        .describe("Repeatable name and phone number rows"),
    field("TICKET_NO", "TICKET NO", FieldKind::Numeric, Section::FileInformation)
        .describe("6 digit Number"),
    field("CID", "CID", FieldKind::Numeric, Section::FileInformation)
        .describe("5 Digit Number"),
    field("FILE_REMARKS", "FILE REMARKS", FieldKind::LongText, Section::FileInformation),
    field("DISTRICT", "DISTRICT", FieldKind::Select, Section::Address)
        .with_options(DISTRICT_OPTIONS),
    field("AC_NAME", "CONSTITUENCY", FieldKind::Select, Section::Address)
        .with_options(AC_NAME_OPTIONS),
    field("MANDAL_NAME", "MANDAL", FieldKind::ShortText, Section::Address),
    field("VILLAGE_NAME", "VILLAGE", FieldKind::ShortText, Section::Address),
    field("DOOR_NO", "H No", FieldKind::ShortText, Section::Address),
    field("ADD_REMARKS", "ADDRESS REMARKS", FieldKind::LongText, Section::Address),
    field("FILE_NO", "FILE NO", FieldKind::Numeric, Section::Scanning),
    field("SCANNED_DATE", "SCANNED DATE", FieldKind::DateTime, Section::Scanning),
    field("SCANNING_REMARKS", "SCANNING REMARKS", FieldKind::LongText, Section::Scanning),
    field("FILE_STATUS", "FILE STATUS", FieldKind::Select, Section::FileStatus)
        .with_options(FILE_STATUS_OPTIONS),
    field("FWD_DATE", "FWD DATE", FieldKind::Date, Section::FileStatus),
    field("UTR_DATE", "UTR DATE", FieldKind::Date, Section::FileStatus),
    field("UTR_NO", "UTR NO", FieldKind::ShortText, Section::FileStatus),
    field("FILE_STATUS_REMARKS", "FILE STATUS REMARKS", FieldKind::LongText, Section::FileStatus),
    field(
        "RESUBMISSION_REQ_DOCS",
        "RESUBMISSION REQ DOCS",
        FieldKind::MultiSelect,
        Section::Resubmission,
    )
        .with_options(DOCUMENT_OPTIONS),
    field("RESUBMISSION_TYPE", "RESUBMISSION TYPE", FieldKind::Select, Section::Resubmission)
        .with_options(RESUBMISSION_TYPE_OPTIONS),
    field(
        "RESUBMISSION_DOCS_RECEIVED",
        "RESUBMISSION DOCS RECEIVED",
        FieldKind::MultiSelect,
        Section::Resubmission,
    )
        .with_options(DOCUMENT_OPTIONS),
    field(
        "RESUBMISSION_INFORMATION",
        "RESUBMISSION INFORMED",
        FieldKind::ContactList,
        Section::Resubmission,
    )
        .describe("Repeatable name, phone number and date rows")
        .dated(),
    field("RESUBMISSION_STATUS", "RESUBMISSION STATUS", FieldKind::Select, Section::Resubmission)
        .with_options(RESUBMISSION_STATUS_OPTIONS),
    field("RESUBMISSION_DATE", "RESUBMISSION DATE", FieldKind::Date, Section::Resubmission),
    field("RESUBMISSION_FWD_DATE", "RESUBMISSION FWD DATE", FieldKind::Date, Section::Resubmission),
    field(
        "RESUBMISSION_REMARKS",
        "RESUBMISSION REMARKS",
        FieldKind::LongText,
        Section::Resubmission,
    ),
    field("LTR_DATE", "LETTER SENT DATE", FieldKind::Date, Section::LetterDistribution),
    field(
        "LTR_DISTRIBUTED_DATE",
        "LETTER DISTRIBUTED DATE",
        FieldKind::Date,
        Section::LetterDistribution,
    ),
    field("LTR_STATUS", "LETTER DISTRIBUTED", FieldKind::Select, Section::LetterDistribution)
        .with_options(LTR_STATUS_OPTIONS),
    field("LTR_BY", "DISTRIBUTED LEADER NAME", FieldKind::ShortText, Section::LetterDistribution),
    field("LTR_LINK1", "PHOTO LINK", FieldKind::Link, Section::LetterDistribution),
    field("LTR_LINK2", "TESTIMONY VIDEO", FieldKind::Link, Section::LetterDistribution),
    field("LTR_REMARKS", "LETTERS REMARKS", FieldKind::LongText, Section::LetterDistribution),
];
