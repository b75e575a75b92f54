//! Authored commentary shown on the dashboard and in the report.
//!
//! None of this text is computed from the data; it stays the same whatever
//! the filters select. Keep it apart from anything in `analysis`.

/// Visual tone of a chart caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Success,
    Error,
}

/// Heading and caption of one chart in the grid.
#[derive(Debug, Clone, Copy)]
pub struct ChartNote {
    pub title: &'static str,
    pub insight: &'static str,
    pub tone: Tone,
}

/// Captions for the eight charts, in grid order.
pub const CHART_NOTES: [ChartNote; 8] = [
    ChartNote {
        title: "1. Attrition by Department",
        insight: "Sales and R&D often show higher turnover; monitor if this is due to specific role pressures.",
        tone: Tone::Info,
    },
    ChartNote {
        title: "2. Income vs. Retention",
        insight: "Lower median income is a strong predictor of exit; salary benchmarking is recommended.",
        tone: Tone::Warning,
    },
    ChartNote {
        title: "3. Age Demographic Risk",
        insight: "Younger talent (ages 25-35) are at higher risk; focus on early-career career pathing.",
        tone: Tone::Success,
    },
    ChartNote {
        title: "4. Overtime Burnout",
        insight: "Employees working overtime are twice as likely to leave compared to those who don't.",
        tone: Tone::Error,
    },
    ChartNote {
        title: "5. Work-Life Balance",
        insight: "A high percentage of leavers report low work-life balance (levels 1 and 2).",
        tone: Tone::Info,
    },
    ChartNote {
        title: "6. Job Level vs. Churn",
        insight: "Entry-level (Level 1) roles have the most churn; mentorship can help bridge this gap.",
        tone: Tone::Success,
    },
    ChartNote {
        title: "7. Distance from Home Impact",
        insight: "Attrition spikes for employees living 10+ miles away; consider remote work options.",
        tone: Tone::Warning,
    },
    ChartNote {
        title: "8. Tenure (Years at Company)",
        insight: "The first 2 years are critical. If an employee stays past year 5, retention probability doubles.",
        tone: Tone::Info,
    },
];

/// A titled card of `(label, text)` bullet points.
#[derive(Debug, Clone, Copy)]
pub struct ActionCard {
    pub title: &'static str,
    pub points: &'static [(&'static str, &'static str)],
}

pub const RISK_FACTORS: ActionCard = ActionCard {
    title: "High Risk Factors",
    points: &[
        ("Overtime Burnout", "Significant correlation with turnover."),
        ("Junior Tenure", "High churn in the first 24 months."),
        ("Compensation", "Income levels for leavers are below market median."),
    ],
};

pub const RETENTION_OPPORTUNITIES: ActionCard = ActionCard {
    title: "Retention Opportunities",
    points: &[
        ("Mentorship", "Strengthening Level 1 & 2 job support."),
        ("Flexibility", "Addressing the \"Distance from Home\" churn via hybrid work."),
        ("Stability", "R&D shows the highest potential for long-term loyalty."),
    ],
};

/// One row of the "Key Findings Recap" table.
#[derive(Debug, Clone, Copy)]
pub struct Finding {
    pub category: &'static str,
    pub primary_driver: &'static str,
    pub risk_level: &'static str,
    pub recommended_action: &'static str,
}

pub const KEY_FINDINGS: [Finding; 4] = [
    Finding {
        category: "Demographics",
        primary_driver: "Younger Age (25-35)",
        risk_level: "High",
        recommended_action: "Career Pathing",
    },
    Finding {
        category: "Financial",
        primary_driver: "Lower Monthly Income",
        risk_level: "Medium-High",
        recommended_action: "Salary Benchmarking",
    },
    Finding {
        category: "Workload",
        primary_driver: "Frequent Overtime",
        risk_level: "Critical",
        recommended_action: "Resource Rebalancing",
    },
    Finding {
        category: "Environment",
        primary_driver: "Long Commutes",
        risk_level: "Medium",
        recommended_action: "Remote Work Options",
    },
];

pub const DASHBOARD_CONCLUSION: &str = "To reduce the current attrition rate, the organization should prioritize Overtime reduction and Junior-level engagement programs over the next quarter.";

pub const REPORT_TITLE: &str = "HR Employees Attrition Analysis Report";

/// Bullet points of the exported report.
pub const REPORT_INSIGHTS: [&str; 5] = [
    "Employees working overtime show significantly higher attrition.",
    "Highest churn observed in the first 2 years of employment.",
    "Lower monthly income strongly correlates with employee exit.",
    "Longer distance from home increases attrition risk.",
    "Junior-level roles require focused retention strategies.",
];

pub const REPORT_CONCLUSION: &str = "Reducing overtime workload and improving engagement for junior employees should be the top priorities to lower attrition in the next quarter.";

pub const DATA_SOURCE_CAPTION: &str = "Created for HR Analysis • Data Source: IBM HR Analytics";
