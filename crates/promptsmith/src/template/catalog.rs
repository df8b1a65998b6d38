// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Compiled-in template data.
//!
//! Bodies are authored by hand; `variables` lists each body's placeholders in
//! first-appearance order. The closed-world test in the parent module keeps
//! the two in sync.

use super::{Domain, TemplateDescriptor};

/// Every registered template, grouped by domain.
pub(crate) const TEMPLATES: &[TemplateDescriptor] = &[
    // -- General --------------------------------------------------------
    TemplateDescriptor {
        domain: Domain::General,
        name: "code_generation",
        display_name: "Code Generation",
        body: "Task: {task_description}\n\n\
               Requirements:\n\
               - Language: {language}\n\
               - Purpose: {purpose}\n\
               - Constraints: {constraints}\n\n\
               Please generate code that:\n\
               1. Includes comprehensive error handling\n\
               2. Follows best practices for {language}\n\
               3. Is well-commented and documented\n\
               4. Includes example usage",
        variables: &["task_description", "language", "purpose", "constraints"],
    },
    TemplateDescriptor {
        domain: Domain::General,
        name: "analysis",
        display_name: "Analysis",
        body: "Analyze {subject}\n\n\
               Context: {context}\n\n\
               Focus on:\n\
               - Key patterns and trends\n\
               - Underlying causes\n\
               - Implications and consequences\n\
               - Actionable insights\n\n\
               Structure your analysis with:\n\
               1. Executive Summary\n\
               2. Detailed Findings\n\
               3. Recommendations\n\
               4. Supporting Evidence",
        variables: &["subject", "context"],
    },
    TemplateDescriptor {
        domain: Domain::General,
        name: "creative_writing",
        display_name: "Creative Writing",
        body: "Create {content_type} about {topic}\n\n\
               Tone: {tone}\n\
               Length: {length}\n\
               Audience: {audience}\n\n\
               Key elements to include:\n\
               - {element_1}\n\
               - {element_2}\n\n\
               Ensure the content is engaging, original, and appropriate for the audience.",
        variables: &[
            "content_type",
            "topic",
            "tone",
            "length",
            "audience",
            "element_1",
            "element_2",
        ],
    },
    TemplateDescriptor {
        domain: Domain::General,
        name: "data_extraction",
        display_name: "Data Extraction",
        body: "Extract {data_points} from the following text:\n\n\
               Text: {source_text}\n\n\
               Output format: {output_format}\n\n\
               Ensure accuracy and completeness. If a data point is not found, mark it as 'N/A'.",
        variables: &["data_points", "source_text", "output_format"],
    },
    TemplateDescriptor {
        domain: Domain::General,
        name: "tutoring",
        display_name: "Tutoring",
        body: "Explain {concept} to {audience}.\n\n\
               Focus on:\n\
               - Core principles\n\
               - Simple analogies\n\
               - Practical examples\n\
               - Common misconceptions\n\n\
               Break complex ideas into easy-to-understand segments and keep the explanation \
               clear and supportive.",
        variables: &["concept", "audience"],
    },
    // -- Development ----------------------------------------------------
    TemplateDescriptor {
        domain: Domain::Development,
        name: "code_review",
        display_name: "Code Review",
        body: "# Code Review: {pr_title}\n\n\
               **Author**: {author}\n\
               **Reviewer**: {reviewer}\n\
               **Files Changed**: {files_changed}\n\n\
               ## Summary\n\
               {pr_description}\n\n\
               ## Review Checklist\n\n\
               ### Architecture & Design\n\
               - Follows established patterns with appropriate abstractions\n\
               - No over-engineering\n\n\
               ### Code Quality\n\
               - Readable, self-documenting, well-named\n\n\
               ### Testing\n\
               - Unit and integration tests updated; edge cases covered\n\n\
               ### Security\n\
               - Inputs validated, no hardcoded secrets, injection vectors closed\n\n\
               ## Detailed Feedback\n\n\
               ### What's Great\n\
               {positive_feedback}\n\n\
               ### Issues Found\n\
               1. **{issue_1}**\n\
               \x20  - Location: `{issue_1_location}`\n\
               \x20  - Suggestion: {issue_1_suggestion}\n\n\
               ## Overall Assessment\n\
               **Approval Status**: {approval_status}",
        variables: &[
            "pr_title",
            "author",
            "reviewer",
            "files_changed",
            "pr_description",
            "positive_feedback",
            "issue_1",
            "issue_1_location",
            "issue_1_suggestion",
            "approval_status",
        ],
    },
    TemplateDescriptor {
        domain: Domain::Development,
        name: "api_design",
        display_name: "API Design",
        body: "Design a {api_style} API for {service_name}.\n\n\
               **Context**\n\
               {service_description}\n\n\
               **Consumers**: {consumers}\n\n\
               **Requirements**\n\
               - Resources and operations: {resources}\n\
               - Authentication: {auth_model}\n\
               - Versioning strategy: {versioning}\n\n\
               **Deliverables**\n\
               1. Endpoint list with methods, paths, and status codes\n\
               2. Request/response schemas with field types\n\
               3. Error model and error codes\n\
               4. Pagination, filtering, and rate-limit conventions\n\
               5. Example requests for the two most common workflows",
        variables: &[
            "api_style",
            "service_name",
            "service_description",
            "consumers",
            "resources",
            "auth_model",
            "versioning",
        ],
    },
    // -- Data science -----------------------------------------------------
    TemplateDescriptor {
        domain: Domain::DataScience,
        name: "data_insights",
        display_name: "Data Insights Report",
        body: "Analyze {data_subject} covering {analysis_period} and report the findings.\n\n\
               **Data**\n\
               {data_findings}\n\n\
               **Audience**: {target_audience}\n\
               **Business context**: {business_context}\n\n\
               **Report structure**\n\
               1. Executive summary with the three most important insights\n\
               2. Insight deep-dives:\n\
               \x20  - {insight_1_pattern}\n\
               \x20  - {insight_2_pattern}\n\
               \x20  - {insight_3_pattern}\n\
               3. Statistical confidence and data-quality caveats\n\
               4. Recommended actions ranked by expected impact\n\n\
               Quantify every claim and separate correlation from causation.",
        variables: &[
            "data_subject",
            "analysis_period",
            "data_findings",
            "target_audience",
            "business_context",
            "insight_1_pattern",
            "insight_2_pattern",
            "insight_3_pattern",
        ],
    },
    // -- Operations -------------------------------------------------------
    TemplateDescriptor {
        domain: Domain::Operations,
        name: "standard_operating_procedure",
        display_name: "Standard Operating Procedure",
        body: "# Standard Operating Procedure: {procedure_name}\n\n\
               **SOP ID**: {sop_id}\n\
               **Version**: {version}\n\
               **Owner**: {owner}\n\n\
               ## Purpose\n\
               {purpose_statement}\n\n\
               ## Scope\n\
               Applies to: {applies_to}\n\
               Does not apply to: {exceptions}\n\n\
               ## Procedure\n\n\
               ### Step 1: {step_1_title}\n\
               **Responsible**: {step_1_responsible}\n\
               {step_1_details}\n\
               **Checkpoint**: {step_1_checkpoint}\n\n\
               ### Step 2: {step_2_title}\n\
               **Responsible**: {step_2_responsible}\n\
               {step_2_details}\n\
               **Checkpoint**: {step_2_checkpoint}\n\n\
               ## Error Handling\n\
               - **Symptoms**: {error_symptoms}\n\
               - **Resolution**: {error_resolution}\n\n\
               ## Key Performance Indicators\n\
               - {kpi_1}\n\
               - {kpi_2}",
        variables: &[
            "procedure_name",
            "sop_id",
            "version",
            "owner",
            "purpose_statement",
            "applies_to",
            "exceptions",
            "step_1_title",
            "step_1_responsible",
            "step_1_details",
            "step_1_checkpoint",
            "step_2_title",
            "step_2_responsible",
            "step_2_details",
            "step_2_checkpoint",
            "error_symptoms",
            "error_resolution",
            "kpi_1",
            "kpi_2",
        ],
    },
    TemplateDescriptor {
        domain: Domain::Operations,
        name: "root_cause_analysis",
        display_name: "Root Cause Analysis",
        body: "# Root Cause Analysis: {incident_title}\n\n\
               **Date**: {incident_date}\n\
               **Severity**: {severity}\n\
               **Duration**: {duration}\n\n\
               ## Impact\n\
               {impact_summary}\n\n\
               ## Timeline\n\
               {timeline}\n\n\
               ## Five Whys\n\
               1. Why did the incident occur? {why_1}\n\
               2. Why did that happen? {why_2}\n\
               3. Why did that happen? {why_3}\n\n\
               ## Root Cause\n\
               {root_cause}\n\n\
               ## Contributing Factors\n\
               {contributing_factors}\n\n\
               ## Corrective Actions\n\
               - Immediate: {immediate_actions}\n\
               - Preventive: {preventive_actions}\n\n\
               ## Lessons Learned\n\
               {lessons_learned}",
        variables: &[
            "incident_title",
            "incident_date",
            "severity",
            "duration",
            "impact_summary",
            "timeline",
            "why_1",
            "why_2",
            "why_3",
            "root_cause",
            "contributing_factors",
            "immediate_actions",
            "preventive_actions",
            "lessons_learned",
        ],
    },
    TemplateDescriptor {
        domain: Domain::Operations,
        name: "crisis_communication",
        display_name: "Crisis Communication",
        body: "Draft crisis communications for {crisis_situation} addressed to {target_audience}.\n\n\
               **Situation**\n\
               {crisis_description}\n\n\
               **Current status**: {current_status}\n\
               **Stakeholder impact**: {stakeholder_impact}\n\n\
               **Message content**\n\
               - Actions already taken: {actions_taken}\n\
               - Planned next steps: {planned_steps}\n\
               - Verified facts to communicate: {key_facts}\n\
               - Concerns to address proactively: {potential_concerns}\n\n\
               **Channels**: {communication_channels}\n\n\
               The message must be honest, empathetic, and specific. State what is known, \
               what is not yet known, and when the next update will come.",
        variables: &[
            "crisis_situation",
            "target_audience",
            "crisis_description",
            "current_status",
            "stakeholder_impact",
            "actions_taken",
            "planned_steps",
            "key_facts",
            "potential_concerns",
            "communication_channels",
        ],
    },
    // -- Security ---------------------------------------------------------
    TemplateDescriptor {
        domain: Domain::Security,
        name: "security_assessment",
        display_name: "Security Assessment",
        body: "Conduct a security assessment of {system_name}.\n\n\
               **Scope**\n\
               - Components in scope: {scope_components}\n\
               - Assessment type: {assessment_type}\n\
               - Compliance requirements: {compliance_requirements}\n\n\
               **Threat Model**\n\
               - Assets at risk: {assets}\n\
               - Threat actors considered: {threat_actors}\n\
               - Trust boundaries: {trust_boundaries}\n\n\
               **Assessment Areas**\n\
               1. Authentication and authorization\n\
               2. Input validation and injection vectors\n\
               3. Data protection at rest and in transit\n\
               4. Secrets management and key rotation\n\
               5. Logging, monitoring, and incident detection\n\n\
               **Deliverables**\n\
               - Findings ranked by severity ({severity_scale})\n\
               - Exploitability and impact rating per finding\n\
               - Remediation plan with owners and target dates\n\
               - Executive summary written for {report_audience}",
        variables: &[
            "system_name",
            "scope_components",
            "assessment_type",
            "compliance_requirements",
            "assets",
            "threat_actors",
            "trust_boundaries",
            "severity_scale",
            "report_audience",
        ],
    },
    TemplateDescriptor {
        domain: Domain::Security,
        name: "incident_response",
        display_name: "Incident Response Plan",
        body: "Draft an incident response plan for {incident_type} affecting {affected_system}.\n\n\
               **Detection**\n\
               - Alert sources: {alert_sources}\n\
               - Severity classification: {severity_criteria}\n\n\
               **Containment**\n\
               {containment_steps}\n\n\
               **Eradication and Recovery**\n\
               {recovery_steps}\n\n\
               **Communication**\n\
               - Internal escalation: {escalation_path}\n\
               - External notification obligations: {notification_obligations}\n\n\
               **Post-Incident**\n\
               - Evidence retention: {evidence_retention}\n\
               - Blameless review scheduled within {review_deadline}",
        variables: &[
            "incident_type",
            "affected_system",
            "alert_sources",
            "severity_criteria",
            "containment_steps",
            "recovery_steps",
            "escalation_path",
            "notification_obligations",
            "evidence_retention",
            "review_deadline",
        ],
    },
    // -- Business ---------------------------------------------------------
    TemplateDescriptor {
        domain: Domain::Business,
        name: "competitor_analysis",
        display_name: "Competitor Analysis",
        body: "Conduct a competitive analysis for {company_name} in the {industry} market.\n\n\
               **Market Overview**\n\
               - Market size: {market_size}\n\
               - Growth rate: {growth_rate}\n\
               - Key trends: {market_trends}\n\n\
               **Competitors**\n\
               1. {competitor_1}\n\
               2. {competitor_2}\n\
               3. {competitor_3}\n\n\
               **Analysis Matrix**\n\
               Compare market share, pricing strategy, product features, target audience, \
               strengths, and weaknesses for {company_name} against each competitor.\n\n\
               **SWOT for {company_name}**\n\
               - Strengths: {strengths}\n\
               - Weaknesses: {weaknesses}\n\
               - Opportunities: {opportunities}\n\
               - Threats: {threats}\n\n\
               **Strategic Recommendations**\n\
               1. {recommendation_1}\n\
               2. {recommendation_2}",
        variables: &[
            "company_name",
            "industry",
            "market_size",
            "growth_rate",
            "market_trends",
            "competitor_1",
            "competitor_2",
            "competitor_3",
            "strengths",
            "weaknesses",
            "opportunities",
            "threats",
            "recommendation_1",
            "recommendation_2",
        ],
    },
    TemplateDescriptor {
        domain: Domain::Business,
        name: "stakeholder_update",
        display_name: "Stakeholder Update",
        body: "Subject: {project_name} - {update_type} Update - {date}\n\n\
               Dear {stakeholder_group},\n\n\
               ## Executive Summary\n\
               {executive_summary}\n\n\
               **Overall Status**: {overall_status}\n\
               **Timeline**: {timeline_status}\n\
               **Budget**: {budget_status}\n\n\
               ## Key Accomplishments\n\
               - {accomplishment_1}\n\
               - {accomplishment_2}\n\n\
               ## Upcoming Milestones\n\
               | Milestone | Target Date | Status |\n\
               |-----------|-------------|--------|\n\
               | {milestone_1} | {milestone_1_date} | {milestone_1_status} |\n\n\
               ## Challenges & Mitigation\n\
               - {challenge_1}: {challenge_1_mitigation}\n\n\
               ## Next Steps\n\
               {next_steps}\n\n\
               Best regards,\n\
               {sender_name}",
        variables: &[
            "project_name",
            "update_type",
            "date",
            "stakeholder_group",
            "executive_summary",
            "overall_status",
            "timeline_status",
            "budget_status",
            "accomplishment_1",
            "accomplishment_2",
            "milestone_1",
            "milestone_1_date",
            "milestone_1_status",
            "challenge_1",
            "challenge_1_mitigation",
            "next_steps",
            "sender_name",
        ],
    },
    TemplateDescriptor {
        domain: Domain::Business,
        name: "okr_planning",
        display_name: "OKR Planning",
        body: "# OKR Planning: {period}\n\n\
               **Team**: {team_name}\n\
               **Mission**: {mission_statement}\n\n\
               ## Previous Period Review\n\
               - Achievement rate: {previous_achievement_rate}\n\
               - Key learnings: {key_learnings}\n\n\
               ## Objective 1: {objective_1}\n\
               **Why this matters**: {objective_1_rationale}\n\n\
               Key Results:\n\
               1. {o1_kr1} (baseline {o1_kr1_baseline}, target {o1_kr1_target})\n\
               2. {o1_kr2} (baseline {o1_kr2_baseline}, target {o1_kr2_target})\n\n\
               ## Objective 2: {objective_2}\n\
               **Why this matters**: {objective_2_rationale}\n\n\
               Key Results:\n\
               1. {o2_kr1} (baseline {o2_kr1_baseline}, target {o2_kr1_target})\n\n\
               ## Risks\n\
               - {risk_1}: mitigated by {risk_1_mitigation}\n\n\
               ## Review Cadence\n\
               {review_cadence}",
        variables: &[
            "period",
            "team_name",
            "mission_statement",
            "previous_achievement_rate",
            "key_learnings",
            "objective_1",
            "objective_1_rationale",
            "o1_kr1",
            "o1_kr1_baseline",
            "o1_kr1_target",
            "o1_kr2",
            "o1_kr2_baseline",
            "o1_kr2_target",
            "objective_2",
            "objective_2_rationale",
            "o2_kr1",
            "o2_kr1_baseline",
            "o2_kr1_target",
            "risk_1",
            "risk_1_mitigation",
            "review_cadence",
        ],
    },
    // -- Quality ----------------------------------------------------------
    TemplateDescriptor {
        domain: Domain::Quality,
        name: "test_plan",
        display_name: "Test Plan",
        body: "Create a test plan for {feature_name}.\n\n\
               **Context**\n\
               {feature_description}\n\n\
               **Quality goals**: {quality_goals}\n\n\
               **Test Scope**\n\
               - In scope: {in_scope}\n\
               - Out of scope: {out_of_scope}\n\n\
               **Test Types**\n\
               1. Unit tests: core logic and edge cases\n\
               2. Integration tests: component boundaries and contracts\n\
               3. Regression tests: {regression_focus}\n\
               4. Performance tests: {performance_targets}\n\n\
               **Environments**: {environments}\n\n\
               **Exit Criteria**\n\
               - All critical and high defects resolved\n\
               - Coverage target: {coverage_target}\n\
               - Sign-off by {sign_off_owner}",
        variables: &[
            "feature_name",
            "feature_description",
            "quality_goals",
            "in_scope",
            "out_of_scope",
            "regression_focus",
            "performance_targets",
            "environments",
            "coverage_target",
            "sign_off_owner",
        ],
    },
    TemplateDescriptor {
        domain: Domain::Quality,
        name: "client_feedback_survey",
        display_name: "Client Feedback Survey",
        body: "Design a client feedback survey for {service_type} clients at the \
               {relationship_stage} stage.\n\n\
               **Purpose**: {survey_purpose}\n\n\
               **Evaluation areas**\n\
               {evaluation_areas}\n\n\
               **Survey requirements**\n\
               - Mix of rating scales (1-5) and open-ended questions\n\
               - Completable in under five minutes\n\
               - Questions ordered from general satisfaction to specifics\n\
               - One clear call to action per question\n\n\
               **Distribution**: {distribution_method}\n\
               **Follow-up plan**: {followup_plans}",
        variables: &[
            "service_type",
            "relationship_stage",
            "survey_purpose",
            "evaluation_areas",
            "distribution_method",
            "followup_plans",
        ],
    },
];
