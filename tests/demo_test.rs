#[cfg(test)]
mod demo_output {
    use for_each_in_place::Result;
    use for_each_in_place::demo::{Demo, Variant};
    use for_each_in_place::render::OutputFormat;
    use serde_json::Value;

    fn lines(format: OutputFormat, variant: Option<Variant>) -> Result<Vec<String>> {
        let mut out = Vec::new();
        Demo::new(format, variant).run(&mut out)?;
        Ok(String::from_utf8_lossy(&out)
            .lines()
            .map(str::to_string)
            .collect())
    }

    #[test]
    fn plain_output_is_five_lines() -> Result<()> {
        let lines = lines(OutputFormat::Plain, None)?;
        assert_eq!(
            lines,
            vec![
                "0 1 2 3 4 5 ",
                "0 1 4 9 16 25 ",
                "0 10 40 90 160 250 ",
                "1.21 4.84 10.89 19.36 30.25 ",
                "PALLAS CERES VESTA ",
            ]
        );
        Ok(())
    }

    #[test]
    fn json_output_parses_back() -> Result<()> {
        let lines = lines(OutputFormat::Json, Some(Variant::Method))?;
        assert_eq!(lines.len(), 5);

        let parsed: Vec<Value> = lines
            .iter()
            .map(|line| serde_json::from_str(line))
            .collect::<core::result::Result<_, _>>()?;

        assert_eq!(parsed[0], serde_json::json!([0, 1, 2, 3, 4, 5]));
        assert_eq!(parsed[2], serde_json::json!([0, 10, 40, 90, 160, 250]));
        assert_eq!(parsed[4], serde_json::json!(["PALLAS", "CERES", "VESTA"]));

        let doubles: Vec<f64> = serde_json::from_value(parsed[3].clone())?;
        let expected = [1.21, 4.84, 10.89, 19.36, 30.25];
        for (got, want) in doubles.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
        Ok(())
    }
}
