use crate::areas::comparison::Comparison;
use crate::artifacts::render::config::RenderConfig;
use crate::artifacts::render::side_by_side::SideBySide;

impl Comparison {
    pub fn side_by_side(&self, config: &RenderConfig) -> anyhow::Result<()> {
        let (rows, _) = self.split()?;
        let renderer = SideBySide::new(config, self.sources());

        let mut writer = self.writer();
        renderer.render_header(self.titles(), &mut **writer)?;
        renderer.render(&rows, &mut **writer)?;

        Ok(())
    }
}
