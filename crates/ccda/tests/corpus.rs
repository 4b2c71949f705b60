//! Golden extraction cases over representative C-CDA shapes.

use ccda::extract_metadata;

struct Case {
    name: &'static str,
    xml: &'static str,
    expected_patient: &'static str,
    expected_iso: Option<&'static str>,
    expected_formatted: &'static str,
}

#[test]
fn golden_extraction_corpus() {
    let cases = [
        Case {
            name: "full_document",
            xml: r#"<?xml version="1.0" encoding="UTF-8"?>
<ClinicalDocument xmlns="urn:hl7-org:v3">
  <recordTarget>
    <patientRole>
      <patient>
        <name use="L">
          <given>Jane</given>
          <given>Q</given>
          <family>Doe</family>
        </name>
      </patient>
    </patientRole>
  </recordTarget>
  <documentationOf>
    <serviceEvent>
      <effectiveTime><low value="20190101"/></effectiveTime>
    </serviceEvent>
  </documentationOf>
  <component>
    <structuredBody>
      <component>
        <section>
          <entry>
            <encounter classCode="ENC">
              <effectiveTime><low value="20230101000000"/></effectiveTime>
            </encounter>
          </entry>
          <entry>
            <encounter classCode="ENC">
              <effectiveTime><low value="20230615120000"/></effectiveTime>
            </encounter>
          </entry>
        </section>
      </component>
    </structuredBody>
  </component>
</ClinicalDocument>"#,
            expected_patient: "Jane Q Doe",
            expected_iso: Some("2023-06-15"),
            expected_formatted: "June 15, 2023",
        },
        Case {
            name: "service_event_fallback_no_encounters",
            xml: r#"<ClinicalDocument xmlns="urn:hl7-org:v3">
  <recordTarget><patientRole><patient>
    <name><given>Sam</given><family>Smith</family></name>
  </patient></patientRole></recordTarget>
  <documentationOf><serviceEvent>
    <effectiveTime><low value="20220304"/></effectiveTime>
  </serviceEvent></documentationOf>
  <component><structuredBody><component><section>
    <entry><observation/></entry>
  </section></component></structuredBody></component>
</ClinicalDocument>"#,
            expected_patient: "Sam Smith",
            expected_iso: Some("2022-03-04"),
            expected_formatted: "March 4, 2022",
        },
        Case {
            name: "no_patient_name",
            xml: r#"<ClinicalDocument xmlns="urn:hl7-org:v3">
  <recordTarget><patientRole><patient/></patientRole></recordTarget>
  <component><structuredBody><component><section>
    <entry><encounter>
      <effectiveTime value="20210730"/>
    </encounter></entry>
  </section></component></structuredBody></component>
</ClinicalDocument>"#,
            expected_patient: "Unknown Patient",
            expected_iso: Some("2021-07-30"),
            expected_formatted: "July 30, 2021",
        },
        Case {
            name: "prefixed_namespace",
            xml: r#"<hl7:ClinicalDocument xmlns:hl7="urn:hl7-org:v3">
  <hl7:recordTarget><hl7:patientRole><hl7:patient>
    <hl7:name><hl7:given>Ana</hl7:given><hl7:family>Silva</hl7:family></hl7:name>
  </hl7:patient></hl7:patientRole></hl7:recordTarget>
</hl7:ClinicalDocument>"#,
            expected_patient: "Ana Silva",
            expected_iso: None,
            expected_formatted: "Unknown Date",
        },
        Case {
            name: "invalid_calendar_date_degrades",
            xml: r#"<ClinicalDocument xmlns="urn:hl7-org:v3">
  <recordTarget><patientRole><patient>
    <name><given>Lee</given></name>
  </patient></patientRole></recordTarget>
  <component><structuredBody><component><section>
    <entry><encounter>
      <effectiveTime value="20231399"/>
    </encounter></entry>
  </section></component></structuredBody></component>
</ClinicalDocument>"#,
            expected_patient: "Lee",
            expected_iso: None,
            expected_formatted: "Unknown Date",
        },
        Case {
            name: "truncated_document",
            xml: "<ClinicalDocument><recordTarget><patientRole><pat",
            expected_patient: "Unknown Patient",
            expected_iso: None,
            expected_formatted: "Unknown Date",
        },
        Case {
            name: "encounter_time_in_element_text",
            xml: r#"<ClinicalDocument xmlns="urn:hl7-org:v3">
  <component><structuredBody><component><section>
    <entry><encounter>
      <effectiveTime><low>20200229</low></effectiveTime>
    </encounter></entry>
  </section></component></structuredBody></component>
</ClinicalDocument>"#,
            expected_patient: "Unknown Patient",
            expected_iso: Some("2020-02-29"),
            expected_formatted: "February 29, 2020",
        },
    ];

    for case in cases {
        let meta = extract_metadata(case.xml);
        assert_eq!(meta.patient_name, case.expected_patient, "case {}", case.name);
        assert_eq!(
            meta.encounter_date.as_deref(),
            case.expected_iso,
            "case {}",
            case.name
        );
        assert_eq!(meta.date_formatted, case.expected_formatted, "case {}", case.name);
    }
}
