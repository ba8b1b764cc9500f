//! Rows of the zero-configuration demo table.

/// One row of the demo table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Employee {
    /// Full name.
    pub name: &'static str,
    /// Job title.
    pub position: &'static str,
    /// Office city.
    pub office: &'static str,
    /// Age in years.
    pub age: u32,
    /// ISO start date.
    pub start_date: &'static str,
    /// Annual salary in dollars.
    pub salary: u32,
}

const fn row(
    name: &'static str,
    position: &'static str,
    office: &'static str,
    age: u32,
    start_date: &'static str,
    salary: u32,
) -> Employee {
    Employee {
        name,
        position,
        office,
        age,
        start_date,
        salary,
    }
}

/// The demo's 57 rows in source order.
pub const EMPLOYEES: &[Employee] = &[
    row("Tiger Nixon", "System Architect", "Edinburgh", 61, "2011-04-25", 320_800),
    row("Garrett Winters", "Accountant", "Tokyo", 63, "2011-07-25", 170_750),
    row("Ashton Cox", "Junior Technical Author", "San Francisco", 66, "2009-01-12", 86_000),
    row("Cedric Kelly", "Senior Javascript Developer", "Edinburgh", 22, "2012-03-29", 433_060),
    row("Airi Satou", "Accountant", "Tokyo", 33, "2008-11-28", 162_700),
    row("Brielle Williamson", "Integration Specialist", "New York", 61, "2012-12-02", 372_000),
    row("Herrod Chandler", "Sales Assistant", "San Francisco", 59, "2012-08-06", 137_500),
    row("Rhona Davidson", "Integration Specialist", "Tokyo", 55, "2010-10-14", 327_900),
    row("Colleen Hurst", "Javascript Developer", "San Francisco", 39, "2009-09-15", 205_500),
    row("Sonya Frost", "Software Engineer", "Edinburgh", 23, "2008-12-13", 103_600),
    row("Jena Gaines", "Office Manager", "London", 30, "2008-12-19", 90_560),
    row("Quinn Flynn", "Support Lead", "Edinburgh", 22, "2013-03-03", 342_000),
    row("Charde Marshall", "Regional Director", "San Francisco", 36, "2008-10-16", 470_600),
    row("Haley Kennedy", "Senior Marketing Designer", "London", 43, "2012-12-18", 313_500),
    row("Tatyana Fitzpatrick", "Regional Director", "London", 19, "2010-03-17", 385_750),
    row("Michael Silva", "Marketing Designer", "London", 66, "2012-11-27", 198_500),
    row("Paul Byrd", "Chief Financial Officer (CFO)", "New York", 64, "2010-06-09", 725_000),
    row("Gloria Little", "Systems Administrator", "New York", 59, "2009-04-10", 237_500),
    row("Bradley Greer", "Software Engineer", "London", 41, "2012-10-13", 132_000),
    row("Dai Rios", "Personnel Lead", "Edinburgh", 35, "2012-09-26", 217_500),
    row("Jenette Caldwell", "Development Lead", "New York", 30, "2011-09-03", 345_000),
    row("Yuri Berry", "Chief Marketing Officer (CMO)", "New York", 40, "2009-06-25", 675_000),
    row("Caesar Vance", "Pre-Sales Support", "New York", 21, "2011-12-12", 106_450),
    row("Doris Wilder", "Sales Assistant", "Sydney", 23, "2010-09-20", 85_600),
    row("Angelica Ramos", "Chief Executive Officer (CEO)", "London", 47, "2009-10-09", 1_200_000),
    row("Gavin Joyce", "Developer", "Edinburgh", 42, "2010-12-22", 92_575),
    row("Jennifer Chang", "Regional Director", "Singapore", 28, "2010-11-14", 357_650),
    row("Brenden Wagner", "Software Engineer", "San Francisco", 28, "2011-06-07", 206_850),
    row("Fiona Green", "Chief Operating Officer (COO)", "San Francisco", 48, "2010-03-11", 850_000),
    row("Shou Itou", "Regional Marketing", "Tokyo", 20, "2011-08-14", 163_000),
    row("Michelle House", "Integration Specialist", "Sydney", 37, "2011-06-02", 95_400),
    row("Suki Burks", "Developer", "London", 53, "2009-10-22", 114_500),
    row("Prescott Bartlett", "Technical Author", "London", 27, "2011-05-07", 145_000),
    row("Gavin Cortez", "Team Leader", "San Francisco", 22, "2008-10-26", 235_500),
    row("Martena Mccray", "Post-Sales support", "Edinburgh", 46, "2011-03-09", 324_050),
    row("Unity Butler", "Marketing Designer", "San Francisco", 47, "2009-12-09", 85_675),
    row("Howard Hatfield", "Office Manager", "San Francisco", 51, "2008-12-16", 164_500),
    row("Hope Fuentes", "Secretary", "San Francisco", 41, "2010-02-12", 109_850),
    row("Vivian Harrell", "Financial Controller", "San Francisco", 62, "2009-02-14", 452_500),
    row("Timothy Mooney", "Office Manager", "London", 37, "2008-12-11", 136_200),
    row("Jackson Bradshaw", "Director", "New York", 65, "2008-09-26", 645_750),
    row("Olivia Liang", "Support Engineer", "Singapore", 64, "2011-02-03", 234_500),
    row("Bruno Nash", "Software Engineer", "London", 38, "2011-05-03", 163_500),
    row("Sakura Yamamoto", "Support Engineer", "Tokyo", 37, "2009-08-19", 139_575),
    row("Thor Walton", "Developer", "New York", 61, "2013-08-11", 98_540),
    row("Finn Camacho", "Support Engineer", "San Francisco", 47, "2009-07-07", 87_500),
    row("Serge Baldwin", "Data Coordinator", "Singapore", 64, "2012-04-09", 138_575),
    row("Zenaida Frank", "Software Engineer", "New York", 63, "2010-01-04", 125_250),
    row("Zorita Serrano", "Software Engineer", "San Francisco", 56, "2012-06-01", 115_000),
    row("Jennifer Acosta", "Junior Javascript Developer", "Edinburgh", 43, "2013-02-01", 75_650),
    row("Cara Stevens", "Sales Assistant", "New York", 46, "2011-12-06", 145_600),
    row("Hermione Butler", "Regional Director", "London", 47, "2011-03-21", 356_250),
    row("Lael Greer", "Systems Administrator", "London", 21, "2009-02-27", 103_500),
    row("Jonas Alexander", "Developer", "San Francisco", 30, "2010-07-14", 86_500),
    row("Shad Decker", "Regional Director", "Edinburgh", 51, "2008-11-13", 183_000),
    row("Michael Bruce", "Javascript Developer", "Singapore", 29, "2011-06-27", 183_000),
    row("Donna Snider", "Customer Support", "New York", 27, "2011-01-25", 112_000),
];
