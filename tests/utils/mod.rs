use std::path::{Path, PathBuf};

/// Header line of the appointment export
pub const HEADER: &str = "PatientId,AppointmentID,Gender,ScheduledDay,AppointmentDay,Age,Neighbourhood,Scholarship,Hipertension,Diabetes,Alcoholism,Handcap,SMS_received,No-show";

/// Sample line from the end-to-end scenario
pub const CENTRO_LINE: &str =
    "1,10,F,2023-01-01T00:00:00Z,2023-01-04T00:00:00Z,30,Centro,0,0,0,0,0,1,No";

/// Fields of a test appointment that vary between tests
#[derive(Debug, Clone)]
pub struct LineBuilder {
    pub gender: &'static str,
    pub scheduled: &'static str,
    pub appointment: &'static str,
    pub age: String,
    pub neighbourhood: &'static str,
    pub hypertension: &'static str,
    pub diabetes: &'static str,
    pub alcoholism: &'static str,
    pub handicap: &'static str,
    pub sms: &'static str,
    pub no_show: &'static str,
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self {
            gender: "F",
            scheduled: "2016-04-29T18:38:08Z",
            appointment: "2016-04-29T00:00:00Z",
            age: "62".to_string(),
            neighbourhood: "JARDIM DA PENHA",
            hypertension: "0",
            diabetes: "0",
            alcoholism: "0",
            handicap: "0",
            sms: "0",
            no_show: "No",
        }
    }
}

impl LineBuilder {
    #[must_use]
    pub fn build(&self) -> String {
        format!(
            "29872499824296,5642903,{},{},{},{},{},0,{},{},{},{},{},{}",
            self.gender,
            self.scheduled,
            self.appointment,
            self.age,
            self.neighbourhood,
            self.hypertension,
            self.diabetes,
            self.alcoholism,
            self.handicap,
            self.sms,
            self.no_show
        )
    }
}

/// Write an input file with the header and the given lines
pub fn write_input(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    std::fs::write(&path, contents).expect("failed to write test input");
    path
}

/// Test configuration without progress bars
#[must_use]
pub fn test_config() -> noshow_stats::AnalysisConfig {
    noshow_stats::AnalysisConfig {
        show_progress: false,
        chunk_size: 4,
        ..Default::default()
    }
}
